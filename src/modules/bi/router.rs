use axum::{Router, routing::get};

use super::controller::get_summary;
use crate::state::AppState;

pub fn init_bi_router() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}
