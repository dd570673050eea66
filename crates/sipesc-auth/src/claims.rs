//! JWT claim structure for session tokens.

use serde::{Deserialize, Serialize};
use sipesc_models::Role;
use utoipa::ToSchema;

/// Claims embedded in the opaque session token.
///
/// The token only identifies a session; the principal itself is read from the
/// session store so module updates and logout take effect immediately.
///
/// # Fields
///
/// - `sub`: Principal ID (subject)
/// - `email`: Principal email
/// - `role`: Principal role at login time
/// - `sid`: Session namespace in the key-value store
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub sid: String,
    pub exp: usize,
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "u-escola-001".to_string(),
            email: "escola@sipesc.gov.br".to_string(),
            role: Role::School,
            sid: "2f1c".to_string(),
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"u-escola-001""#));
        assert!(serialized.contains(r#""role":"school""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"u-mp-001","email":"mp@sipesc.gov.br","role":"prosecutor","sid":"abc","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.role, Role::Prosecutor);
        assert_eq!(claims.sid, "abc");
        assert_eq!(claims.exp, 9999999999);
    }
}
