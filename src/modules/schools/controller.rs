use axum::{Json, extract::Path};
use sipesc_core::AppError;
use sipesc_models::{School, SchoolId};

use super::service::SchoolService;
use crate::middleware::auth::AuthUser;

#[utoipa::path(
    get,
    path = "/api/schools",
    responses(
        (status = 200, description = "Schools visible to the caller", body = Vec<School>),
        (status = 303, description = "Not signed in, or role not allowed"),
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn get_schools(auth_user: AuthUser) -> Json<Vec<School>> {
    Json(SchoolService::get_schools(&auth_user))
}

#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(
        ("id" = String, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School details", body = School),
        (status = 303, description = "Not signed in, or role not allowed"),
        (status = 403, description = "School outside the caller's scope"),
        (status = 404, description = "School not found")
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
pub async fn get_school(
    auth_user: AuthUser,
    Path(id): Path<SchoolId>,
) -> Result<Json<School>, AppError> {
    let school = SchoolService::get_school(&auth_user, &id)?;
    Ok(Json(school))
}
