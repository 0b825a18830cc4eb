use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::types::Json as SqlJson;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateDiningRequest, DiningQuery, UpdateDiningRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::dining::{DiningType, NewDiningVenue};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_dining(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DiningQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(venue_type) = &query.venue_type
        && DiningType::parse(venue_type).is_none()
    {
        return Err(AppError::Validation("unknown dining type".into()));
    }

    let venues = state
        .dining_repo
        .list_by_name(query.venue_type.as_deref())
        .await?;
    Ok(Json(venues))
}

pub async fn admin_list_dining(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let venues = state.dining_repo.list_newest().await?;
    Ok(Json(venues))
}

pub async fn admin_get_dining(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state
        .dining_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Dining venue not found".into()))?;
    Ok(Json(venue))
}

pub async fn create_dining(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateDiningRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let venue = state
        .dining_repo
        .create(&NewDiningVenue {
            name: payload.name,
            venue_type: payload.venue_type,
            floor: payload.floor,
            hours: payload.hours,
            description: payload.description,
            menu_url: payload.menu_url,
            images: payload.images,
        })
        .await?;

    info!(venue_id = venue.id, "dining venue created");
    Ok((StatusCode::CREATED, Json(venue)))
}

pub async fn update_dining(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateDiningRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut venue = state
        .dining_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Dining venue not found".into()))?;

    if let Some(name) = payload.name {
        venue.name = name;
    }
    if let Some(venue_type) = payload.venue_type {
        venue.venue_type = venue_type;
    }
    if let Some(floor) = payload.floor {
        venue.floor = Some(floor);
    }
    if let Some(hours) = payload.hours {
        venue.hours = hours;
    }
    if let Some(description) = payload.description {
        venue.description = description;
    }
    if let Some(menu_url) = payload.menu_url {
        venue.menu_url = Some(menu_url);
    }
    if let Some(images) = payload.images {
        venue.images = SqlJson(images);
    }

    let updated = state.dining_repo.update(&venue).await?;
    Ok(Json(updated))
}

pub async fn delete_dining(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.dining_repo.delete(id).await?;
    info!(venue_id = id, "dining venue deleted");
    Ok(StatusCode::NO_CONTENT)
}
