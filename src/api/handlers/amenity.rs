use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::types::Json as SqlJson;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{AmenityQuery, CreateAmenityRequest, UpdateAmenityRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::amenity::{AmenityCategory, NewAmenity};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_amenities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AmenityQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(category) = &query.category
        && AmenityCategory::parse(category).is_none()
    {
        return Err(AppError::Validation("unknown amenity category".into()));
    }

    let amenities = state
        .amenity_repo
        .list_by_name(query.category.as_deref())
        .await?;
    Ok(Json(amenities))
}

pub async fn admin_list_amenities(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let amenities = state.amenity_repo.list_newest().await?;
    Ok(Json(amenities))
}

pub async fn admin_get_amenity(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = state
        .amenity_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Amenity not found".into()))?;
    Ok(Json(amenity))
}

pub async fn create_amenity(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateAmenityRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let amenity = state
        .amenity_repo
        .create(&NewAmenity {
            name: payload.name,
            description: payload.description,
            category: payload.category,
            hours: payload.hours,
            images: payload.images,
        })
        .await?;

    info!(amenity_id = amenity.id, "amenity created");
    Ok((StatusCode::CREATED, Json(amenity)))
}

pub async fn update_amenity(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAmenityRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut amenity = state
        .amenity_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Amenity not found".into()))?;

    if let Some(name) = payload.name {
        amenity.name = name;
    }
    if let Some(description) = payload.description {
        amenity.description = description;
    }
    if let Some(category) = payload.category {
        amenity.category = category;
    }
    if let Some(hours) = payload.hours {
        amenity.hours = Some(hours);
    }
    if let Some(images) = payload.images {
        amenity.images = SqlJson(images);
    }

    let updated = state.amenity_repo.update(&amenity).await?;
    Ok(Json(updated))
}

pub async fn delete_amenity(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.amenity_repo.delete(id).await?;
    info!(amenity_id = id, "amenity deleted");
    Ok(StatusCode::NO_CONTENT)
}
