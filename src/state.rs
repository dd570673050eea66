use std::sync::Arc;

use sipesc_config::{CorsConfig, JwtConfig, RoutesConfig, SessionConfig};
use sipesc_store::{KeyValueStore, build_store};

use crate::directory::AccountDirectory;
use crate::modules::incidents::service::IncidentLog;

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub routes: RoutesConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub directory: Arc<AccountDirectory>,
    pub incidents: Arc<IncidentLog>,
}

impl AppState {
    /// State over `store`, with the demo directory and the seeded incident log.
    pub fn new(
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        routes: RoutesConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            jwt_config,
            cors_config,
            routes,
            store,
            directory: Arc::new(AccountDirectory::from_demo_accounts()),
            incidents: Arc::new(IncidentLog::seeded()),
        }
    }
}

pub fn init_app_state(session_config: &SessionConfig) -> AppState {
    AppState::new(
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        RoutesConfig::from_env(),
        build_store(session_config),
    )
}
