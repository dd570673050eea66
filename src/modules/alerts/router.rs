use axum::{Router, routing::get};

use super::controller::get_alerts;
use crate::state::AppState;

pub fn init_alerts_router() -> Router<AppState> {
    Router::new().route("/", get(get_alerts))
}
