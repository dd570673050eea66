use axum::Json;
use axum::extract::State;
use sipesc_auth::access;
use sipesc_core::AppError;
use sipesc_models::{AccessSnapshot, LoginRequest, LoginResponse, MessageResponse, Principal};
use tracing::instrument;
use utoipa::ToSchema;

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Login with a demo account and receive a session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 401, description = "Unknown account", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let session = AuthService::login_user(&state, dto).await?;
    Ok(Json(session))
}

/// Clear the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn logout_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::logout_user(&state, &auth_user).await?;
    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}

/// Get the principal of the current session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current principal", body = Principal),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn get_session(auth_user: AuthUser) -> Json<Principal> {
    Json(auth_user.principal)
}

/// Get every access decision for the current principal
#[utoipa::path(
    get,
    path = "/api/auth/access",
    responses(
        (status = 200, description = "Access snapshot", body = AccessSnapshot),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn get_access(auth_user: AuthUser) -> Json<AccessSnapshot> {
    Json(access::snapshot(&auth_user.principal))
}
