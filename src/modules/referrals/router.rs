use axum::{Router, routing::get};

use super::controller::get_referrals;
use crate::state::AppState;

pub fn init_referrals_router() -> Router<AppState> {
    Router::new().route("/", get(get_referrals))
}
