use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_access, get_session, login_user, logout_user};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
        .route("/session", get(get_session))
        .route("/access", get(get_access))
}
