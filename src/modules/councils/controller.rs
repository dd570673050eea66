use axum::{Json, extract::Path};
use sipesc_core::AppError;
use sipesc_models::{Council, CouncilId, RegionId, RegionOverview};

use super::service::CouncilService;
use crate::middleware::auth::AuthUser;

#[utoipa::path(
    get,
    path = "/api/councils",
    responses(
        (status = 200, description = "Councils visible to the caller", body = Vec<Council>),
        (status = 303, description = "Not signed in, or not a councilor"),
    ),
    tag = "Councils",
    security(("bearer_auth" = []))
)]
pub async fn get_councils(auth_user: AuthUser) -> Json<Vec<Council>> {
    Json(CouncilService::get_councils(&auth_user))
}

#[utoipa::path(
    get,
    path = "/api/councils/{id}",
    params(
        ("id" = String, Path, description = "Council ID")
    ),
    responses(
        (status = 200, description = "Council details", body = Council),
        (status = 303, description = "Not signed in, or not a councilor"),
        (status = 403, description = "Council outside the caller's scope"),
        (status = 404, description = "Council not found")
    ),
    tag = "Councils",
    security(("bearer_auth" = []))
)]
pub async fn get_council(
    auth_user: AuthUser,
    Path(id): Path<CouncilId>,
) -> Result<Json<Council>, AppError> {
    Ok(Json(CouncilService::get_council(&auth_user, &id)?))
}

#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    params(
        ("id" = String, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region with its visible schools and councils", body = RegionOverview),
        (status = 303, description = "Not signed in, or not a councilor"),
        (status = 403, description = "Region outside the caller's scope"),
        (status = 404, description = "Region not found")
    ),
    tag = "Councils",
    security(("bearer_auth" = []))
)]
pub async fn get_region(
    auth_user: AuthUser,
    Path(id): Path<RegionId>,
) -> Result<Json<RegionOverview>, AppError> {
    Ok(Json(CouncilService::get_region(&auth_user, &id)?))
}
