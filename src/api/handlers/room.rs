use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::types::Json as SqlJson;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateRoomRequest, UpdateRoomRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::room::NewRoom;
use crate::domain::services::slug::ensure_unique_slug;
use crate::error::AppError;
use crate::state::AppState;

// Public catalog, cheapest first.
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list_by_price().await?;
    Ok(Json(rooms))
}

pub async fn get_room_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .room_repo
        .find_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;
    Ok(Json(room))
}

pub async fn admin_list_rooms(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list_newest().await?;
    Ok(Json(rooms))
}

pub async fn admin_get_room(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .room_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;
    Ok(Json(room))
}

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let slug = ensure_unique_slug(state.room_repo.as_ref(), &payload.name, None).await?;

    let room = state
        .room_repo
        .create(&NewRoom {
            slug,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            size_sqm: payload.size_sqm,
            occupancy: payload.occupancy,
            images: payload.images,
            highlights: payload.highlights,
        })
        .await?;

    info!(room_id = room.id, slug = %room.slug, "room created");
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn update_room(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut room = state
        .room_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    // A rename re-derives the slug; everything else leaves it stable.
    if let Some(name) = payload.name
        && name != room.name
    {
        room.slug = ensure_unique_slug(state.room_repo.as_ref(), &name, Some(id)).await?;
        room.name = name;
    }

    if let Some(description) = payload.description {
        room.description = description;
    }
    if let Some(price) = payload.price {
        room.price = price;
    }
    if let Some(size_sqm) = payload.size_sqm {
        room.size_sqm = size_sqm;
    }
    if let Some(occupancy) = payload.occupancy {
        room.occupancy = occupancy;
    }
    if let Some(images) = payload.images {
        room.images = SqlJson(images);
    }
    if let Some(highlights) = payload.highlights {
        room.highlights = SqlJson(highlights);
    }

    let updated = state.room_repo.update(&room).await?;
    info!(room_id = updated.id, "room updated");
    Ok(Json(updated))
}

pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.room_repo.delete(id).await?;
    info!(room_id = id, "room deleted");
    Ok(StatusCode::NO_CONTENT)
}
