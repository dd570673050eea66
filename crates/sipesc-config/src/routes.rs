//! Navigation targets consumed by the guards.
//!
//! The values are opaque to the server: they are handed back to clients in
//! `Location` headers when a guard decides to navigate away.

use std::env;

/// Login and dashboard routes.
///
/// # Environment Variables
///
/// - `LOGIN_ROUTE`: where unauthenticated clients are sent (default: `/login`)
/// - `DASHBOARD_ROUTE`: default redirect for denied clients (default: `/dashboard`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutesConfig {
    pub login_route: String,
    pub dashboard_route: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_route: "/login".to_string(),
            dashboard_route: "/dashboard".to_string(),
        }
    }
}

impl RoutesConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_route: env::var("LOGIN_ROUTE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.login_route),
            dashboard_route: env::var("DASHBOARD_ROUTE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.dashboard_route),
        }
    }
}
