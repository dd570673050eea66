//! Read/write API over one persisted session.
//!
//! A session is stored as two entries, the raw token and the JSON-encoded
//! principal. Both are written together and cleared together. If the pair
//! cannot be read back as a session (one half missing, or the principal does
//! not parse) both entries are dropped and the caller sees no session.

use std::sync::Arc;

use sipesc_models::{Principal, Session, UserId};
use tracing::{debug, instrument, warn};

use crate::keys::{self, namespace_of_user_key, token_key, user_key};
use crate::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// The server-side store for the session id carried in a token.
    pub fn for_sid(store: Arc<dyn KeyValueStore>, sid: &str) -> Self {
        Self::new(store, keys::session_namespace(sid))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn get_session(&self) -> Result<Option<Session>, StoreError> {
        let token = self.store.get(&token_key(&self.namespace)).await?;
        let user = self.store.get(&user_key(&self.namespace)).await?;

        match (token, user) {
            (None, None) => Ok(None),
            (Some(token), Some(user)) => match serde_json::from_str::<Principal>(&user) {
                Ok(user) => Ok(Some(Session { token, user })),
                Err(e) => {
                    warn!(error = %e, "Stored principal is malformed, clearing session");
                    self.clear_session().await?;
                    Ok(None)
                }
            },
            _ => {
                warn!("Stored session is incomplete, clearing session");
                self.clear_session().await?;
                Ok(None)
            }
        }
    }

    /// Replaces the whole session.
    #[instrument(skip_all, fields(namespace = %self.namespace, user_id = %session.user.id))]
    pub async fn set_session(&self, session: &Session) -> Result<(), StoreError> {
        let user = serde_json::to_string(&session.user)?;
        self.store
            .set_many(&[
                (token_key(&self.namespace), session.token.clone()),
                (user_key(&self.namespace), user),
            ])
            .await?;
        debug!("Session stored");
        Ok(())
    }

    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn clear_session(&self) -> Result<(), StoreError> {
        self.store
            .remove_many(&[token_key(&self.namespace), user_key(&self.namespace)])
            .await?;
        debug!("Session cleared");
        Ok(())
    }

    /// Swaps the principal of an existing session, keeping its token.
    ///
    /// The write only happens while both entries are still present, so a
    /// logout racing with this call is never undone. Returns `false` when
    /// there is no session to update.
    #[instrument(skip_all, fields(namespace = %self.namespace, user_id = %user.id))]
    pub async fn replace_user(&self, user: &Principal) -> Result<bool, StoreError> {
        let token_key = token_key(&self.namespace);
        let user_key = user_key(&self.namespace);
        let encoded = serde_json::to_string(user)?;

        let replaced = self
            .store
            .set_many_if_present(&[token_key, user_key.clone()], &[(user_key, encoded)])
            .await?;
        if !replaced {
            debug!("No session to update");
        }
        Ok(replaced)
    }
}

/// Loads every server-side session, clearing those `is_live` rejects.
async fn live_sessions<F>(
    store: &Arc<dyn KeyValueStore>,
    is_live: F,
) -> Result<(Vec<(SessionStore, Session)>, usize), StoreError>
where
    F: Fn(&Session) -> bool,
{
    let mut live = Vec::new();
    let mut purged = 0;
    for key in store.keys(keys::SESSION_PREFIX).await? {
        let Some(namespace) = namespace_of_user_key(&key) else {
            continue;
        };
        let sessions = SessionStore::new(Arc::clone(store), namespace);
        let Some(session) = sessions.get_session().await? else {
            continue;
        };
        if is_live(&session) {
            live.push((sessions, session));
        } else {
            sessions.clear_session().await?;
            purged += 1;
        }
    }
    Ok((live, purged))
}

/// Server-side session stores whose principal is `user_id`.
///
/// Sessions `is_live` rejects are cleared on the way and never returned.
pub async fn sessions_of_user<F>(
    store: &Arc<dyn KeyValueStore>,
    user_id: &UserId,
    is_live: F,
) -> Result<Vec<SessionStore>, StoreError>
where
    F: Fn(&Session) -> bool,
{
    let (live, _) = live_sessions(store, is_live).await?;
    Ok(live
        .into_iter()
        .filter(|(_, session)| &session.user.id == user_id)
        .map(|(sessions, _)| sessions)
        .collect())
}

/// Clears every server-side session `is_live` rejects and returns how many went.
#[instrument(skip_all)]
pub async fn purge_sessions<F>(
    store: &Arc<dyn KeyValueStore>,
    is_live: F,
) -> Result<usize, StoreError>
where
    F: Fn(&Session) -> bool,
{
    let (_, purged) = live_sessions(store, is_live).await?;
    if purged > 0 {
        debug!(purged, "Dead sessions cleared");
    }
    Ok(purged)
}
