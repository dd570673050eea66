use axum::{
    Json,
    extract::{Path, State},
};
use sipesc_core::AppError;
use sipesc_models::{Principal, UpdateModulesDto, UserId};

use super::service::AdminService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "Every account", body = Vec<Principal>),
        (status = 303, description = "Not signed in, or not an administrator")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<Principal>> {
    Json(AdminService::get_users(&state))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/modules",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateModulesDto,
    responses(
        (status = 200, description = "Updated account", body = Principal),
        (status = 303, description = "Not signed in, or not an administrator"),
        (status = 400, description = "Malformed body or unknown module"),
        (status = 404, description = "User not found")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn update_user_modules(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    ValidatedJson(dto): ValidatedJson<UpdateModulesDto>,
) -> Result<Json<Principal>, AppError> {
    let updated = AdminService::update_modules(&state, &id, dto).await?;
    Ok(Json(updated))
}
