use axum::{Json, extract::State};

use super::model::DashboardSummary;
use super::service::DashboardService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Counts visible to the caller and the modules to show", body = DashboardSummary),
        (status = 303, description = "Not signed in")
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<DashboardSummary> {
    Json(DashboardService::get_summary(&state.incidents, &auth_user).await)
}
