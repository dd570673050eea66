use axum::{Router, routing::get};

use super::controller::get_students;
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/", get(get_students))
}
