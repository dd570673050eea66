//! Command implementations shared by the binary and its tests.

use anyhow::{Result, anyhow, bail};
use clap::Subcommand;
use sipesc_auth::{access, issue_session, new_session_id};
use sipesc_config::JwtConfig;
use sipesc_models::{CouncilId, Principal, RegionId, SchoolId, Session, directory};
use sipesc_store::SessionStore;
use tracing::info;

/// A single access question.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Check {
    /// Is a module enabled (e.g. `students`, `bi_panel`)
    Module { name: String },
    /// Is a `module:action` permission granted
    Permission { permission: String },
    /// Can the principal see a school
    School { id: String },
    /// Can the principal see a region
    Region { id: String },
    /// Can the principal see a council
    Council { id: String },
    /// Can the principal open the BI panel
    Bi,
}

/// Signs in with a demo account and persists the session, replacing any previous one.
pub async fn login(
    sessions: &SessionStore,
    jwt_config: &JwtConfig,
    email: &str,
    password: &str,
) -> Result<Session> {
    if password.is_empty() {
        bail!("Password is required");
    }

    let principal = directory::find_by_email(email)
        .ok_or_else(|| anyhow!("No account registered for {}", email.trim()))?;

    let session = issue_session(&principal, &new_session_id(), jwt_config)
        .map_err(|e| anyhow!(e.message()))?;
    sessions.set_session(&session).await?;

    info!(user_id = %principal.id, role = %principal.role, "Logged in");
    Ok(session)
}

pub async fn logout(sessions: &SessionStore) -> Result<()> {
    sessions.clear_session().await?;
    Ok(())
}

pub async fn current_session(sessions: &SessionStore) -> Result<Option<Session>> {
    Ok(sessions.get_session().await?)
}

pub fn evaluate(principal: Option<&Principal>, check: &Check) -> bool {
    match check {
        Check::Module { name } => access::is_module_name_enabled(principal, name),
        Check::Permission { permission } => access::has_permission(principal, permission),
        Check::School { id } => access::can_access_school(principal, &SchoolId::new(id.as_str())),
        Check::Region { id } => access::can_access_region(principal, &RegionId::new(id.as_str())),
        Check::Council { id } => {
            access::can_access_council(principal, &CouncilId::new(id.as_str()))
        }
        Check::Bi => access::can_access_bi(principal),
    }
}

pub fn accounts() -> Vec<Principal> {
    directory::demo_accounts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sipesc_store::{FileStore, KeyValueStore, MemoryStore, keys};
    use std::sync::Arc;

    fn sessions() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStore::new()), keys::DEFAULT_NAMESPACE)
    }

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let sessions = sessions();
        let session = login(&sessions, &jwt_config(), directory::SCHOOL_EMAIL, "anything")
            .await
            .unwrap();

        let stored = current_session(&sessions).await.unwrap();
        assert_eq!(stored, Some(session));
    }

    #[tokio::test]
    async fn test_login_unknown_email_leaves_no_session() {
        let sessions = sessions();
        let result = login(&sessions, &jwt_config(), "intruso@example.com", "x").await;
        assert!(result.is_err());
        assert_eq!(current_session(&sessions).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_requires_password() {
        let sessions = sessions();
        let result = login(&sessions, &jwt_config(), directory::SCHOOL_EMAIL, "").await;
        assert!(result.is_err());
        assert_eq!(current_session(&sessions).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_then_everything_is_denied() {
        let sessions = sessions();
        login(&sessions, &jwt_config(), directory::ADMIN_EMAIL, "x")
            .await
            .unwrap();
        logout(&sessions).await.unwrap();

        let session = current_session(&sessions).await.unwrap();
        let principal = session.as_ref().map(|s| &s.user);
        assert!(principal.is_none());
        assert!(!evaluate(principal, &Check::Bi));
        assert!(!evaluate(principal, &Check::School { id: "esc-001".into() }));
    }

    #[tokio::test]
    async fn test_session_survives_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let open = || {
            let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&path));
            SessionStore::new(store, keys::DEFAULT_NAMESPACE)
        };

        let issued = login(&open(), &jwt_config(), directory::TEACHER_EMAIL, "x")
            .await
            .unwrap();

        let stored = current_session(&open()).await.unwrap();
        assert_eq!(stored, Some(issued));

        logout(&open()).await.unwrap();
        assert_eq!(current_session(&open()).await.unwrap(), None);
    }

    #[test]
    fn test_evaluate_councilor() {
        let councilor = directory::find_by_email(directory::COUNCILOR_EMAIL).unwrap();
        let p = Some(&councilor);
        assert!(evaluate(p, &Check::School { id: "esc-002".into() }));
        assert!(!evaluate(p, &Check::School { id: "esc-003".into() }));
        assert!(evaluate(p, &Check::Region { id: "reg-norte".into() }));
        assert!(evaluate(p, &Check::Council { id: "ct-001".into() }));
        assert!(evaluate(p, &Check::Module { name: "referrals".into() }));
        assert!(!evaluate(p, &Check::Module { name: "unknown".into() }));
        assert!(!evaluate(p, &Check::Bi));
    }

    #[test]
    fn test_accounts_cover_every_role() {
        assert_eq!(accounts().len(), 5);
    }
}
