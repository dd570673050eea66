use axum::{Json, extract::State, http::StatusCode};
use sipesc_core::AppError;
use sipesc_models::{CreateIncidentDto, Incident};

use super::service::IncidentService;
use crate::middleware::auth::{AuthUser, RequireIncidentsCreate};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/incidents",
    responses(
        (status = 200, description = "Incidents of the schools visible to the caller", body = Vec<Incident>),
        (status = 303, description = "Not signed in, or incidents module disabled")
    ),
    tag = "Incidents",
    security(("bearer_auth" = []))
)]
pub async fn get_incidents(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<Vec<Incident>> {
    Json(IncidentService::get_incidents(&state.incidents, &auth_user).await)
}

#[utoipa::path(
    post,
    path = "/api/incidents",
    request_body = CreateIncidentDto,
    responses(
        (status = 201, description = "Incident recorded", body = Incident),
        (status = 400, description = "Malformed body"),
        (status = 403, description = "Missing incidents:create, or school outside scope"),
        (status = 404, description = "School not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Incidents",
    security(("bearer_auth" = []))
)]
pub async fn create_incident(
    State(state): State<AppState>,
    RequireIncidentsCreate(auth_user): RequireIncidentsCreate,
    ValidatedJson(dto): ValidatedJson<CreateIncidentDto>,
) -> Result<(StatusCode, Json<Incident>), AppError> {
    let incident = IncidentService::create_incident(&state.incidents, &auth_user, dto).await?;
    Ok((StatusCode::CREATED, Json(incident)))
}
