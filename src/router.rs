use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use sipesc_models::{Module, Role};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::guard::{Guard, enforce_guard};
use crate::modules::admin::router::init_admin_router;
use crate::modules::alerts::model::disabled_payload;
use crate::modules::alerts::router::init_alerts_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::bi::router::init_bi_router;
use crate::modules::councils::router::{init_councils_router, init_regions_router};
use crate::modules::dashboard::router::init_dashboard_router;
use crate::modules::incidents::router::init_incidents_router;
use crate::modules::referrals::router::init_referrals_router;
use crate::modules::schools::router::init_schools_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let guarded = |router: Router<AppState>, guard: Guard| {
        router.route_layer(middleware::from_fn_with_state(guard, enforce_guard))
    };

    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/dashboard",
                    guarded(
                        init_dashboard_router(),
                        Guard::protected_route(state.clone(), Role::ALL),
                    ),
                )
                .nest(
                    "/schools",
                    guarded(
                        init_schools_router(),
                        Guard::protected_route(
                            state.clone(),
                            [Role::School, Role::Teacher, Role::Councilor],
                        ),
                    ),
                )
                .nest(
                    "/councils",
                    guarded(
                        init_councils_router(),
                        Guard::protected_route(state.clone(), [Role::Councilor]),
                    ),
                )
                .nest(
                    "/regions",
                    guarded(
                        init_regions_router(),
                        Guard::protected_route(state.clone(), [Role::Councilor]),
                    ),
                )
                .nest(
                    "/students",
                    guarded(
                        init_students_router(),
                        Guard::visualization(state.clone(), Module::Students),
                    ),
                )
                .nest("/incidents", init_incidents_router(&state))
                .nest(
                    "/referrals",
                    guarded(
                        init_referrals_router(),
                        Guard::visualization(state.clone(), Module::Referrals),
                    ),
                )
                .nest(
                    "/alerts",
                    guarded(
                        init_alerts_router(),
                        Guard::visualization(state.clone(), Module::Alerts)
                            .with_fallback(disabled_payload()),
                    ),
                )
                .nest(
                    "/bi",
                    guarded(
                        init_bi_router(),
                        Guard::visualization(state.clone(), Module::BiPanel),
                    ),
                )
                .nest(
                    "/admin",
                    guarded(
                        init_admin_router(),
                        Guard::protected_route(state.clone(), [Role::Admin]),
                    ),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
