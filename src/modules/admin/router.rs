use axum::{
    Router,
    routing::{get, put},
};

use super::controller::{get_users, update_user_modules};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/users/{id}/modules", put(update_user_modules))
}
