//! JWT utilities for session tokens.
//!
//! The persisted session stores an opaque `token`; in SIPESC that token is an
//! HS256 JWT naming the principal and the session namespace it belongs to.
//!
//! # Example
//!
//! ```ignore
//! use sipesc_auth::{create_session_token, verify_token};
//! use sipesc_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_session_token(&principal, &session_id, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sid, session_id);
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use sipesc_config::JwtConfig;
use sipesc_core::AppError;
use sipesc_models::{Principal, Session};

use crate::claims::Claims;

/// Generates a fresh session namespace id.
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a session token for `principal` bound to session `sid`.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_session_token(
    principal: &Principal,
    sid: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = Claims {
        sub: principal.id.to_string(),
        email: principal.email.clone(),
        role: principal.role,
        sid: sid.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Issues a fresh session record for `principal` bound to session `sid`.
pub fn issue_session(
    principal: &Principal,
    sid: &str,
    jwt_config: &JwtConfig,
) -> Result<Session, AppError> {
    let token = create_session_token(principal, sid, jwt_config)?;
    Ok(Session {
        token,
        user: principal.clone(),
    })
}

/// Verifies a session token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

/// Whether a stored session can still authenticate: its token verifies and
/// names the stored principal. Expired sessions are dead and may be purged.
pub fn is_session_live(session: &Session, jwt_config: &JwtConfig) -> bool {
    verify_token(&session.token, jwt_config)
        .is_ok_and(|claims| claims.sub == session.user.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sipesc_models::{Role, directory};

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn teacher() -> Principal {
        directory::find_by_email(directory::TEACHER_EMAIL).unwrap()
    }

    #[test]
    fn test_create_and_verify_token() {
        let config = get_test_jwt_config();
        let sid = new_session_id();

        let token = create_session_token(&teacher(), &sid, &config).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "u-professor-001");
        assert_eq!(claims.email, directory::TEACHER_EMAIL);
        assert_eq!(claims.role, Role::Teacher);
        assert_eq!(claims.sid, sid);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        assert!(verify_token("invalid-token", &config).is_err());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_session_token(&teacher(), "sid", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };
        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_issue_session_carries_principal() {
        let config = get_test_jwt_config();
        let session = issue_session(&teacher(), "sid-1", &config).unwrap();
        assert_eq!(session.user, teacher());
        assert_eq!(verify_token(&session.token, &config).unwrap().sid, "sid-1");
    }

    #[test]
    fn test_session_liveness() {
        let config = get_test_jwt_config();
        let session = issue_session(&teacher(), "sid-1", &config).unwrap();
        assert!(is_session_live(&session, &config));

        let other = directory::find_by_email(directory::SCHOOL_EMAIL).unwrap();
        let swapped = Session {
            token: session.token.clone(),
            user: other,
        };
        assert!(!is_session_live(&swapped, &config));

        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: teacher().id.to_string(),
            email: teacher().email,
            role: Role::Teacher,
            sid: "sid-1".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let expired = Session {
            token: encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret(config.secret.as_bytes()),
            )
            .unwrap(),
            user: teacher(),
        };
        assert!(!is_session_live(&expired, &config));
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
