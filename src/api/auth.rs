//! Authentication endpoints
//!
//! Login only checks that a user with the given email exists; there is no
//! credential verification in this service. Logout is a stateless no-op
//! kept for surface symmetry.

use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::api::users::UserResponse;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// POST /auth/login
///
/// Returns the matching user on success, 401 when no user has the email.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!("Login attempt");

    let user = state
        .user_service
        .login(&request.email)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /auth/logout
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.user_service.logout().await.map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
