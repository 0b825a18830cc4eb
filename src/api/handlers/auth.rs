use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{LoginRequest, RegisterRequest, is_valid_email};
use crate::api::dtos::responses::{AuthResponse, UserProfile};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::user::{NewUser, UserRole};
use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.password.len() < 6 {
        return Err(AppError::Validation("password must be at least 6 characters".into()));
    }

    let user = state
        .user_repo
        .find_by_email(&payload.email)
        .await?
        .ok_or(AppError::Unauthorized("Invalid credentials".into()))?;

    if !state
        .auth_service
        .verify_password(&payload.password, &user.password_hash)
    {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let token = state.auth_service.issue_token(&user)?;

    info!(user_id = user.id, "user logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

/// Creates another admin account. Guarded: only an existing admin may mint
/// new ones.
pub async fn register(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    create_admin_user(&state, payload).await
}

/// Bootstrap endpoint: open only while the user table has no admin, so a
/// fresh deployment can create its first account without shell access.
pub async fn seed_admin(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.user_repo.count_admins().await? > 0 {
        return Err(AppError::Validation("Admin already exists".into()));
    }
    create_admin_user(&state, payload).await
}

async fn create_admin_user(
    state: &AppState,
    payload: RegisterRequest,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    if !is_valid_email(&payload.email) {
        return Err(AppError::Validation("email must be a valid email address".into()));
    }
    if payload.password.len() < 8 {
        return Err(AppError::Validation("password must be at least 8 characters".into()));
    }

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Validation("User already exists".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;

    let user = state
        .user_repo
        .create(&NewUser {
            email: payload.email,
            password_hash,
            role: UserRole::Admin.as_str().to_string(),
        })
        .await?;

    info!(user_id = user.id, "admin user created");

    Ok((StatusCode::CREATED, Json(UserProfile::from(&user))))
}
