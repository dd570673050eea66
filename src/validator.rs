//! `ValidatedJson`: a JSON body extractor that also runs `validator` rules.
//!
//! A body that cannot be decoded answers 400 naming the offending field where
//! serde reports one. A decoded body that breaks a rule answers 422 with the
//! rule messages, sorted by field.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use sipesc_core::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(undecodable_body)?;

        value.validate().map_err(|errors| {
            AppError::new(StatusCode::UNPROCESSABLE_ENTITY, anyhow!(rule_violations(&errors)))
        })?;

        Ok(ValidatedJson(value))
    }
}

fn undecodable_body(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected a JSON body with 'Content-Type: application/json'".to_string()
        }
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON".to_string(),
        JsonRejection::JsonDataError(_) => decode_failure(&rejection.body_text()),
        _ => "Request body could not be read".to_string(),
    };
    AppError::new(StatusCode::BAD_REQUEST, anyhow!(message))
}

/// Rewrites a serde data error into a message about the request's own fields.
///
/// The text looks like `...target type: enabled_modules[0]: unknown variant ...`
/// where the path before the cause is absent for top-level failures.
fn decode_failure(text: &str) -> String {
    let detail = text.rsplit_once("target type: ").map_or(text, |(_, d)| d);
    let (path, cause) = match detail.split_once(": ") {
        Some((path, cause)) if !path.contains(' ') => (Some(path), cause),
        _ => (None, detail),
    };

    if let Some(field) = backquoted_after(cause, "missing field `") {
        return match path {
            Some(path) => format!("{path}.{field} is required"),
            None => format!("{field} is required"),
        };
    }
    if let Some(value) = backquoted_after(cause, "unknown variant `") {
        let field = path.unwrap_or("value");
        return format!("{field}: '{value}' is not an accepted value");
    }
    if cause.starts_with("invalid type") || cause.starts_with("invalid value") {
        return match path {
            Some(path) => format!("{path} has the wrong type"),
            None => "Request body has the wrong type".to_string(),
        };
    }
    "Request body does not match the expected fields".to_string()
}

fn backquoted_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let start = text.find(marker)? + marker.len();
    text[start..].split('`').next()
}

fn rule_violations(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

    #[derive(Debug, Validate)]
    struct Login {
        #[validate(email(message = "email must be a valid email address"))]
        email: String,
        #[validate(length(min = 1))]
        password: String,
    }

    #[test]
    fn test_rule_violations_are_sorted_by_field() {
        let errors = Login {
            email: "nope".to_string(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            rule_violations(&errors),
            "email must be a valid email address; password is invalid"
        );
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            decode_failure(&format!("{PREFIX}missing field `password` at line 1 column 40")),
            "password is required"
        );
    }

    #[test]
    fn test_unknown_module_names_the_entry() {
        let text = format!(
            "{PREFIX}enabled_modules[1]: unknown variant `teleport`, expected one of `dashboard`, `bi_panel` at line 1 column 42"
        );
        assert_eq!(
            decode_failure(&text),
            "enabled_modules[1]: 'teleport' is not an accepted value"
        );
    }

    #[test]
    fn test_wrong_type() {
        assert_eq!(
            decode_failure(&format!("{PREFIX}severity: invalid type: integer `3`, expected a string")),
            "severity has the wrong type"
        );
        assert_eq!(
            decode_failure(&format!("{PREFIX}invalid type: sequence, expected struct LoginRequest")),
            "Request body has the wrong type"
        );
    }

    #[test]
    fn test_unrecognised_text_falls_back() {
        assert_eq!(
            decode_failure("something else entirely"),
            "Request body does not match the expected fields"
        );
    }
}
