use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{
    CreateTestimonialRequest, LimitQuery, UpdateTestimonialRequest,
};
use crate::api::extractors::auth::AdminUser;
use crate::api::handlers::gallery::clamp_limit;
use crate::domain::models::testimonial::NewTestimonial;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = clamp_limit(query.limit)?;
    let testimonials = state.testimonial_repo.list(limit).await?;
    Ok(Json(testimonials))
}

pub async fn admin_list_testimonials(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let testimonials = state.testimonial_repo.list(None).await?;
    Ok(Json(testimonials))
}

pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateTestimonialRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let testimonial = state
        .testimonial_repo
        .create(&NewTestimonial {
            guest_name: payload.guest_name,
            content: payload.content,
            rating: payload.rating,
        })
        .await?;

    info!(testimonial_id = testimonial.id, "testimonial created");
    Ok((StatusCode::CREATED, Json(testimonial)))
}

pub async fn update_testimonial(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTestimonialRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut testimonial = state
        .testimonial_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Testimonial not found".into()))?;

    if let Some(guest_name) = payload.guest_name {
        testimonial.guest_name = guest_name;
    }
    if let Some(content) = payload.content {
        testimonial.content = content;
    }
    if let Some(rating) = payload.rating {
        testimonial.rating = rating;
    }

    let updated = state.testimonial_repo.update(&testimonial).await?;
    Ok(Json(updated))
}

pub async fn delete_testimonial(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.testimonial_repo.delete(id).await?;
    info!(testimonial_id = id, "testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}
