use axum::{Json, extract::State};

use super::model::AlertsResponse;
use super::service::AlertService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/alerts",
    responses(
        (status = 200, description = "Alerts for the caller's schools, or an empty list with module_enabled=false", body = AlertsResponse)
    ),
    tag = "Alerts",
    security(("bearer_auth" = []))
)]
pub async fn get_alerts(State(state): State<AppState>, auth_user: AuthUser) -> Json<AlertsResponse> {
    let alerts = AlertService::get_alerts(&state.incidents, &auth_user).await;
    Json(AlertsResponse {
        alerts,
        module_enabled: true,
    })
}
