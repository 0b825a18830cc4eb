use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use tracing::Span;

use crate::domain::models::user::{User, UserRole};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated staff identity for `/api/v1/admin` routes. Verifies the
/// bearer token, requires the ADMIN role, and loads the current user row so
/// a deleted account stops working immediately even with a live token.
pub struct AdminUser(pub User);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized("Authentication required".into()))?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let claims = app_state.auth_service.verify_token(token)?;

        if claims.role != UserRole::Admin.as_str() {
            return Err(AppError::Forbidden("Admin privileges required".into()));
        }

        let user = app_state
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::Unauthorized("Authentication required".into()))?;

        if user.role != UserRole::Admin.as_str() {
            return Err(AppError::Forbidden("Admin privileges required".into()));
        }

        Span::current().record("user_id", user.id);

        Ok(AdminUser(user))
    }
}
