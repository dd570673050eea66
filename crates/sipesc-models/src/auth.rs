//! Authentication models and DTOs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::Module;
use crate::users::Principal;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// The persisted session record: an opaque token plus the principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub token: String,
    pub user: Principal,
}

pub type LoginResponse = Session;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateModulesDto {
    pub enabled_modules: Vec<Module>,
}

/// Every evaluator decision for the current principal, for menus and dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AccessSnapshot {
    pub role: crate::roles::Role,
    pub full_access: bool,
    pub is_admin: bool,
    pub can_access_bi: bool,
    pub modules: BTreeMap<String, bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "escola@sipesc.gov.br".to_string(),
            password: "x".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_password = LoginRequest {
            email: "escola@sipesc.gov.br".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }
}
