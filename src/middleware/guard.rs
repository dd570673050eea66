//! Guard middleware.
//!
//! Each guarded router gets a [`Guard`] as middleware state. Per request the
//! guard resolves the session, runs one [`GuardCycle`] and maps the outcome
//! onto HTTP:
//!
//! | Outcome | Response |
//! |---|---|
//! | render children | the handler runs |
//! | navigate | `303 See Other` with `Location` |
//! | fallback | `200` with the guard's fallback payload |
//! | render nothing | `403` |
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use crate::middleware::guard::{Guard, enforce_guard};
//!
//! let councils = init_councils_router().route_layer(middleware::from_fn_with_state(
//!     Guard::protected_route(state.clone(), [Role::Councilor]),
//!     enforce_guard,
//! ));
//! ```

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::Value;
use sipesc_auth::{GuardCycle, GuardPolicy, Render, SessionView};
use sipesc_core::AppError;
use sipesc_models::{Module, Role};
use tracing::{debug, warn};

use crate::metrics;
use crate::middleware::auth::optional_auth;
use crate::state::AppState;

#[derive(Clone, Debug)]
pub struct Guard {
    state: AppState,
    policy: GuardPolicy,
    fallback: Option<Value>,
}

impl Guard {
    pub fn new(state: AppState, policy: GuardPolicy) -> Self {
        Self {
            state,
            policy,
            fallback: None,
        }
    }

    pub fn protected_route(state: AppState, allowed_roles: impl Into<Vec<Role>>) -> Self {
        Self::new(state, GuardPolicy::protected_route(allowed_roles))
    }

    pub fn permission(state: AppState, module: Module, action: &str) -> Self {
        Self::new(state, GuardPolicy::permission(module, action))
    }

    pub fn visualization(state: AppState, module: Module) -> Self {
        Self::new(state, GuardPolicy::visualization(module))
    }

    /// Serves `payload` instead of redirecting or refusing when access is denied.
    pub fn with_fallback(mut self, payload: Value) -> Self {
        self.policy = self.policy.with_fallback();
        self.fallback = Some(payload);
        self
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.policy = self.policy.redirect_to(target);
        self
    }
}

pub async fn enforce_guard(
    State(guard): State<Guard>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user = optional_auth(&parts, &guard.state).await?;

    let mut cycle = GuardCycle::mount(guard.policy.clone(), guard.state.routes.clone());
    let decision = cycle.observe(SessionView::Ready(user.as_ref().map(|u| &u.principal)));
    metrics::track_access_decision(guard.policy.kind(), decision.as_str());

    let render = cycle.render();
    let navigation = cycle.take_navigation();
    cycle.unmount();

    match (render, navigation) {
        (Render::Children, _) => {
            if let Some(user) = user {
                parts.extensions.insert(user);
            }
            Ok(next.run(Request::from_parts(parts, body)).await)
        }
        (_, Some(target)) => {
            warn!(
                guard = guard.policy.kind(),
                decision = decision.as_str(),
                path = %parts.uri.path(),
                location = %target,
                "Guard redirected request"
            );
            Ok(Redirect::to(&target).into_response())
        }
        (Render::Fallback, None) => {
            debug!(guard = guard.policy.kind(), path = %parts.uri.path(), "Serving guard fallback");
            Ok(Json(guard.fallback.clone().unwrap_or(Value::Null)).into_response())
        }
        (_, None) => {
            warn!(
                guard = guard.policy.kind(),
                decision = decision.as_str(),
                path = %parts.uri.path(),
                "Guard denied request"
            );
            Err(AppError::forbidden(describe_denial(&guard.policy)))
        }
    }
}

fn describe_denial(policy: &GuardPolicy) -> String {
    match policy {
        GuardPolicy::Permission { module, action, .. } => format!(
            "Access denied. Missing required permission: {}",
            sipesc_core::permissions::permission(module.as_str(), action)
        ),
        GuardPolicy::Visualization { module, .. } => {
            format!("Access denied. Module not enabled: {}", module)
        }
        GuardPolicy::ProtectedRoute { .. } => "Access denied".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_denial() {
        let policy = GuardPolicy::permission(Module::Incidents, "create");
        assert_eq!(
            describe_denial(&policy),
            "Access denied. Missing required permission: incidents:create"
        );

        let policy = GuardPolicy::visualization(Module::Alerts);
        assert!(describe_denial(&policy).ends_with("alerts"));
    }
}
