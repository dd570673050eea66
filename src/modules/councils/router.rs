use axum::{Router, routing::get};

use super::controller::{get_council, get_councils, get_region};
use crate::state::AppState;

pub fn init_councils_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_councils))
        .route("/{id}", get(get_council))
}

pub fn init_regions_router() -> Router<AppState> {
    Router::new().route("/{id}", get(get_region))
}
