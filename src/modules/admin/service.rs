use anyhow::anyhow;
use sipesc_auth::is_session_live;
use sipesc_core::AppError;
use sipesc_models::{Principal, UpdateModulesDto, UserId};
use sipesc_store::sessions_of_user;
use tracing::{info, instrument};

use crate::metrics;
use crate::state::AppState;

pub struct AdminService;

impl AdminService {
    pub fn get_users(state: &AppState) -> Vec<Principal> {
        state.directory.list()
    }

    /// Replaces the enabled modules of a user.
    ///
    /// Live sessions of that user are rewritten in place, so the change
    /// applies to their next request without signing in again. Expired
    /// sessions met along the way are purged.
    #[instrument(skip(state, dto), fields(user.id = %id))]
    pub async fn update_modules(
        state: &AppState,
        id: &UserId,
        dto: UpdateModulesDto,
    ) -> Result<Principal, AppError> {
        let updated = state
            .directory
            .set_modules(id, dto.enabled_modules)
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        let sessions =
            sessions_of_user(&state.store, id, |s| is_session_live(s, &state.jwt_config)).await?;
        for session in &sessions {
            session.replace_user(&updated).await?;
        }

        metrics::track_modules_updated();
        info!(
            modules = ?updated.enabled_modules,
            live_sessions = sessions.len(),
            "User modules updated"
        );

        Ok(updated)
    }
}
