use axum::{
    Router, middleware,
    routing::{get, post},
};
use sipesc_models::Module;

use super::controller::{create_incident, get_incidents};
use crate::middleware::guard::{Guard, enforce_guard};
use crate::state::AppState;

/// Listing is a visualization of the incidents module; recording needs the
/// `incidents:create` permission.
pub fn init_incidents_router(state: &AppState) -> Router<AppState> {
    let list = get(get_incidents).route_layer(middleware::from_fn_with_state(
        Guard::visualization(state.clone(), Module::Incidents),
        enforce_guard,
    ));

    let create = post(create_incident).route_layer(middleware::from_fn_with_state(
        Guard::permission(state.clone(), Module::Incidents, "create"),
        enforce_guard,
    ));

    Router::new().route("/", list.merge(create))
}
