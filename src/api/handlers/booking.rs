use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{
    AdminBookingQuery, CreateBookingRequest, MAX_NOTES_LEN, UpdateBookingRequest, is_valid_email,
};
use crate::api::dtos::responses::BookingWithRoom;
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::booking::{BookingFilter, BookingStatus, NewBooking, PaymentStatus};
use crate::domain::services::pricing;
use crate::error::AppError;
use crate::state::AppState;

/// Public booking creation. Validation happens up front; nothing is written
/// until every check has passed. There is deliberately no availability check
/// and no idempotency key: overlapping stays and duplicate submissions both
/// produce additional rows, matching the site's current behavior.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.customer_name.trim().len() < 2 {
        return Err(AppError::Validation(
            "customerName must be at least 2 characters".into(),
        ));
    }
    if !is_valid_email(&payload.customer_email) {
        return Err(AppError::Validation(
            "customerEmail must be a valid email address".into(),
        ));
    }
    if !(1..=6).contains(&payload.guests) {
        return Err(AppError::Validation("guests must be between 1 and 6".into()));
    }
    if let Some(notes) = &payload.notes
        && notes.len() > MAX_NOTES_LEN
    {
        return Err(AppError::Validation("notes must be 500 characters or fewer".into()));
    }

    if payload.room_id < 1 {
        return Err(AppError::Validation("roomId must be a positive integer".into()));
    }

    let room = state
        .room_repo
        .find_by_id(payload.room_id)
        .await?
        .ok_or(AppError::NotFound("Selected room does not exist".into()))?;

    let (check_in, check_out) = parse_stay_range(&payload.check_in, &payload.check_out)?;

    if check_out <= check_in {
        return Err(AppError::Validation(
            "Check-out must be after check-in".into(),
        ));
    }

    let nights = pricing::nights_between(check_in, check_out);
    let total_price = pricing::total_price(room.price, nights);

    info!(
        room_id = room.id,
        nights, %total_price,
        "creating booking"
    );

    let booking = state
        .booking_repo
        .create(&NewBooking {
            room_id: room.id,
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            customer_phone: payload.customer_phone,
            check_in,
            check_out,
            guests: payload.guests,
            total_price,
            notes: payload.notes,
        })
        .await?;

    info!(booking_id = booking.id, "booking created");

    Ok((
        StatusCode::CREATED,
        Json(BookingWithRoom::new(booking, room)),
    ))
}

fn parse_stay_range(
    check_in: &str,
    check_out: &str,
) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let parse = |value: &str| {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| AppError::Validation("Invalid check-in or check-out date".into()))
    };
    Ok((parse(check_in)?, parse(check_out)?))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<AdminBookingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = query.status.map(|s| s.trim().to_uppercase());
    let payment_status = query.payment_status.map(|s| s.trim().to_uppercase());

    // An unrecognised filter value matches nothing rather than erroring;
    // the admin table treats it as an empty result set.
    if let Some(s) = &status
        && BookingStatus::parse(s).is_none()
    {
        return Ok(Json(Vec::<BookingWithRoom>::new()));
    }
    if let Some(p) = &payment_status
        && PaymentStatus::parse(p).is_none()
    {
        return Ok(Json(Vec::<BookingWithRoom>::new()));
    }

    let filter = BookingFilter {
        status,
        payment_status,
        room_id: query.room_id,
        email: query.email,
    };

    let bookings = state.booking_repo.list(&filter).await?;
    let body: Vec<BookingWithRoom> = bookings
        .into_iter()
        .map(|(booking, room)| BookingWithRoom::new(booking, room))
        .collect();

    Ok(Json(body))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let (booking, room) = state
        .booking_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    Ok(Json(BookingWithRoom::new(booking, room)))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (mut booking, room) = state
        .booking_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if let Some(status) = payload.status {
        let status = BookingStatus::parse(&status)
            .ok_or(AppError::Validation("unknown booking status".into()))?;
        booking.status = status.as_str().to_string();
    }

    if let Some(payment_status) = payload.payment_status {
        let payment_status = PaymentStatus::parse(&payment_status)
            .ok_or(AppError::Validation("unknown payment status".into()))?;
        booking.payment_status = payment_status.as_str().to_string();
    }

    if let Some(notes) = payload.notes {
        if notes.len() > MAX_NOTES_LEN {
            return Err(AppError::Validation("notes must be 500 characters or fewer".into()));
        }
        booking.notes = Some(notes);
    }

    let updated = state.booking_repo.update(&booking).await?;
    info!(booking_id = updated.id, status = %updated.status, "booking updated");

    Ok(Json(BookingWithRoom::new(updated, room)))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.delete(id).await?;
    info!(booking_id = id, "booking deleted");
    Ok(StatusCode::NO_CONTENT)
}
