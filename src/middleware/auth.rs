use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
};
use sipesc_auth::{Claims, access, verify_token};
use sipesc_core::AppError;
use sipesc_models::{CouncilId, Module, Principal, RegionId, SchoolId};
use sipesc_store::SessionStore;
use tracing::debug;

use crate::state::AppState;

/// Extractor that validates the session token and loads the session it names.
///
/// The token alone never authenticates: the session under `session:{sid}`
/// must still exist, hold the same token and belong to the token's subject.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
    pub principal: Principal,
}

impl AuthUser {
    pub fn principal(&self) -> Option<&Principal> {
        Some(&self.principal)
    }

    /// Store of the session this request was authenticated with.
    pub fn sessions(&self, state: &AppState) -> SessionStore {
        SessionStore::for_sid(state.store.clone(), &self.claims.sid)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        access::has_permission(self.principal(), permission)
    }

    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|p| self.has_permission(p))
    }

    pub fn is_module_enabled(&self, module: Module) -> bool {
        access::is_module_enabled(self.principal(), module)
    }

    pub fn can_access_school(&self, id: &SchoolId) -> bool {
        access::can_access_school(self.principal(), id)
    }

    pub fn can_access_region(&self, id: &RegionId) -> bool {
        access::can_access_region(self.principal(), id)
    }

    pub fn can_access_council(&self, id: &CouncilId) -> bool {
        access::can_access_council(self.principal(), id)
    }

    pub fn has_full_access(&self) -> bool {
        access::has_full_access(self.principal())
    }
}

/// Authenticates the request behind `parts`.
///
/// # Errors
///
/// `401` for a missing or invalid token or a session that no longer exists,
/// `500` when the session store fails.
pub async fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthUser, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

    let claims = verify_token(token, &state.jwt_config)?;

    let session = SessionStore::for_sid(state.store.clone(), &claims.sid)
        .get_session()
        .await?
        .ok_or_else(|| AppError::unauthorized("Session expired or signed out"))?;

    if session.token != token || session.user.id.as_str() != claims.sub {
        debug!(sid = %claims.sid, "Token does not match stored session");
        return Err(AppError::unauthorized("Session expired or signed out"));
    }

    Ok(AuthUser {
        claims,
        principal: session.user,
    })
}

/// Like [`authenticate`], but an unauthenticated request yields `None`.
pub async fn optional_auth(parts: &Parts, state: &AppState) -> Result<Option<AuthUser>, AppError> {
    match authenticate(parts, state).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.status == StatusCode::UNAUTHORIZED => Ok(None),
        Err(e) => Err(e),
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Guards that already authenticated the request leave the user behind.
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }
        authenticate(parts, state).await
    }
}

/// Helper macro to create permission check extractors for common permissions.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = sipesc_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                if !auth_user.has_permission($permission) {
                    return Err(sipesc_core::AppError::forbidden(format!(
                        "Access denied. Missing required permission: {}",
                        $permission
                    )));
                }

                Ok($name(auth_user))
            }
        }
    };
}

require_permission!(
    RequireIncidentsCreate,
    sipesc_core::permissions::INCIDENTS_CREATE
);

#[cfg(test)]
mod tests {
    use super::*;
    use sipesc_models::{Role, directory};

    fn auth_user(email: &str) -> AuthUser {
        let principal = directory::find_by_email(email).unwrap();
        AuthUser {
            claims: Claims {
                sub: principal.id.to_string(),
                email: principal.email.clone(),
                role: principal.role,
                sid: "sid".to_string(),
                exp: 9999999999,
                iat: 1234567890,
            },
            principal,
        }
    }

    #[test]
    fn test_has_permission() {
        let teacher = auth_user(directory::TEACHER_EMAIL);
        assert!(teacher.has_permission("incidents:create"));
        assert!(!teacher.has_permission("reports:export"));
        assert!(teacher.has_any_permission(&["reports:export", "students:read"]));
    }

    #[test]
    fn test_full_access_delegates() {
        let prosecutor = auth_user(directory::PROSECUTOR_EMAIL);
        assert_eq!(prosecutor.claims.role, Role::Prosecutor);
        assert!(prosecutor.has_full_access());
        assert!(prosecutor.has_permission("anything:at_all"));
        assert!(prosecutor.can_access_council(&CouncilId::new("ct-002")));
    }

    #[test]
    fn test_school_scoping_delegates() {
        let school = auth_user(directory::SCHOOL_EMAIL);
        assert!(school.can_access_school(&SchoolId::new("esc-001")));
        assert!(!school.can_access_school(&SchoolId::new("esc-002")));
        assert!(!school.can_access_region(&RegionId::new("reg-norte")));
        assert!(school.is_module_enabled(Module::Medications));
    }
}
