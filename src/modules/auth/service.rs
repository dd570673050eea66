use std::time::Duration;

use sipesc_auth::{is_session_live, issue_session, new_session_id};
use sipesc_core::AppError;
use sipesc_models::{LoginRequest, LoginResponse};
use sipesc_store::{SessionStore, purge_sessions};
use tracing::{error, info, instrument, warn};

use crate::metrics;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub struct AuthService;

impl AuthService {
    /// Signs a demo account in. Any non-empty password is accepted.
    #[instrument(skip(state, dto), fields(auth.email = %dto.email))]
    pub async fn login_user(state: &AppState, dto: LoginRequest) -> Result<LoginResponse, AppError> {
        let Some(principal) = state.directory.find_by_email(&dto.email) else {
            warn!("Login attempt for unknown account");
            metrics::track_login(false);
            return Err(AppError::unauthorized("Invalid credentials"));
        };

        let sid = new_session_id();
        let session = issue_session(&principal, &sid, &state.jwt_config)?;
        SessionStore::for_sid(state.store.clone(), &sid)
            .set_session(&session)
            .await?;

        metrics::track_session_token_issued();
        metrics::track_login(true);
        info!(
            user.id = %principal.id,
            user.role = %principal.role,
            session.id = %sid,
            "User logged in"
        );

        Ok(session)
    }

    #[instrument(skip(state, auth_user), fields(user.id = %auth_user.principal.id))]
    pub async fn logout_user(state: &AppState, auth_user: &AuthUser) -> Result<(), AppError> {
        auth_user.sessions(state).clear_session().await?;
        metrics::track_logout();
        info!(session.id = %auth_user.claims.sid, "User logged out");
        Ok(())
    }

    /// Clears every stored session whose token no longer verifies.
    #[instrument(skip(state))]
    pub async fn purge_expired_sessions(state: &AppState) -> Result<usize, AppError> {
        let purged =
            purge_sessions(&state.store, |s| is_session_live(s, &state.jwt_config)).await?;
        metrics::track_sessions_purged(purged);
        if purged > 0 {
            info!(purged, "Expired sessions purged");
        }
        Ok(purged)
    }

    /// Runs [`Self::purge_expired_sessions`] every `every` for the life of the server.
    pub fn spawn_session_sweeper(state: AppState, every: Duration) {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = Self::purge_expired_sessions(&state).await {
                    error!(error = %e.error, "Session sweep failed");
                }
            }
        });
    }
}
