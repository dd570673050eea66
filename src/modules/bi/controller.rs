use axum::{Json, extract::State};

use super::model::BiSummary;
use super::service::BiService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/bi/summary",
    responses(
        (status = 200, description = "Aggregates over the caller's visible data", body = BiSummary),
        (status = 303, description = "Not signed in, or BI panel not available")
    ),
    tag = "BI",
    security(("bearer_auth" = []))
)]
pub async fn get_summary(State(state): State<AppState>, auth_user: AuthUser) -> Json<BiSummary> {
    Json(BiService::get_summary(&state.incidents, &auth_user).await)
}
