use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::event::NewEvent;
use crate::error::AppError;
use crate::state::AppState;

fn parse_event_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::Validation("date must be an ISO-8601 timestamp".into()))
}

pub async fn admin_list_events(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list_by_date().await?;
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let date = parse_event_date(&payload.date)?;

    let event = state
        .event_repo
        .create(&NewEvent {
            title: payload.title,
            description: payload.description,
            date,
            venue: payload.venue,
            image_url: payload.image_url,
        })
        .await?;

    info!(event_id = event.id, "event created");
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut event = state
        .event_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if let Some(title) = payload.title {
        event.title = title;
    }
    if let Some(description) = payload.description {
        event.description = description;
    }
    if let Some(date) = payload.date {
        event.date = parse_event_date(&date)?;
    }
    if let Some(venue) = payload.venue {
        event.venue = venue;
    }
    if let Some(image_url) = payload.image_url {
        event.image_url = Some(image_url);
    }

    let updated = state.event_repo.update(&event).await?;
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.delete(id).await?;
    info!(event_id = id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}
