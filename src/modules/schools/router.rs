use axum::{Router, routing::get};

use super::controller::{get_school, get_schools};
use crate::state::AppState;

pub fn init_schools_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_schools))
        .route("/{id}", get(get_school))
}
