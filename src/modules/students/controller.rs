use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use sipesc_core::AppError;
use sipesc_models::{Student, StudentFilterParams};

use super::service::StudentService;
use crate::middleware::auth::AuthUser;

#[utoipa::path(
    get,
    path = "/api/students",
    params(
        ("school_id" = Option<String>, Query, description = "Restrict to one school"),
        ("at_risk" = Option<bool>, Query, description = "Only students flagged as at risk")
    ),
    responses(
        (status = 200, description = "Students visible to the caller", body = Vec<Student>),
        (status = 303, description = "Not signed in, or students module disabled"),
        (status = 400, description = "Invalid query parameters"),
        (status = 403, description = "Filtered school outside the caller's scope")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
pub async fn get_students(
    auth_user: AuthUser,
    filters: Result<Query<StudentFilterParams>, QueryRejection>,
) -> Result<Json<Vec<Student>>, AppError> {
    let Query(filters) = filters
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e)))?;
    let students = StudentService::get_students(&auth_user, filters)?;
    Ok(Json(students))
}
