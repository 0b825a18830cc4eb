use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{
    CreateGalleryItemRequest, GalleryQuery, UpdateGalleryItemRequest,
};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::gallery::{GalleryCategory, NewGalleryItem};
use crate::error::AppError;
use crate::state::AppState;

const MAX_PAGE_SIZE: i64 = 100;

pub fn clamp_limit(limit: Option<i64>) -> Result<Option<i64>, AppError> {
    match limit {
        Some(n) if !(1..=MAX_PAGE_SIZE).contains(&n) => {
            Err(AppError::Validation("limit must be between 1 and 100".into()))
        }
        other => Ok(other),
    }
}

pub async fn list_gallery(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GalleryQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(category) = &query.category
        && GalleryCategory::parse(category).is_none()
    {
        return Err(AppError::Validation("unknown gallery category".into()));
    }
    let limit = clamp_limit(query.limit)?;

    let items = state
        .gallery_repo
        .list(query.category.as_deref(), limit)
        .await?;
    Ok(Json(items))
}

pub async fn admin_list_gallery(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let items = state.gallery_repo.list(None, None).await?;
    Ok(Json(items))
}

pub async fn create_gallery_item(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateGalleryItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = state
        .gallery_repo
        .create(&NewGalleryItem {
            title: payload.title,
            category: payload.category,
            image_url: payload.image_url,
            caption: payload.caption,
        })
        .await?;

    info!(item_id = item.id, "gallery item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_gallery_item(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateGalleryItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut item = state
        .gallery_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Gallery item not found".into()))?;

    if let Some(title) = payload.title {
        item.title = title;
    }
    if let Some(category) = payload.category {
        item.category = category;
    }
    if let Some(image_url) = payload.image_url {
        item.image_url = image_url;
    }
    if let Some(caption) = payload.caption {
        item.caption = Some(caption);
    }

    let updated = state.gallery_repo.update(&item).await?;
    Ok(Json(updated))
}

pub async fn delete_gallery_item(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.gallery_repo.delete(id).await?;
    info!(item_id = id, "gallery item deleted");
    Ok(StatusCode::NO_CONTENT)
}
