use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{IncidentId, SchoolId, StudentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Incident {
    pub id: IncidentId,
    pub school_id: SchoolId,
    pub student_id: Option<StudentId>,
    pub kind: String,
    pub description: String,
    pub severity: IncidentSeverity,
    pub occurred_on: NaiveDate,
    pub reported_by: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateIncidentDto {
    #[validate(length(min = 1, message = "school_id is required"))]
    pub school_id: String,
    pub student_id: Option<String>,
    #[validate(length(min = 1, max = 100, message = "kind must be between 1 and 100 characters"))]
    pub kind: String,
    #[validate(length(
        min = 1,
        max = 2000,
        message = "description must be between 1 and 2000 characters"
    ))]
    pub description: String,
    pub severity: IncidentSeverity,
    /// Defaults to today
    pub occurred_on: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateIncidentDto {
        CreateIncidentDto {
            school_id: "esc-001".to_string(),
            student_id: None,
            kind: "bullying".to_string(),
            description: "Recess altercation".to_string(),
            severity: IncidentSeverity::Medium,
            occurred_on: None,
        }
    }

    #[test]
    fn test_create_incident_dto_validation() {
        assert!(dto().validate().is_ok());

        let empty_kind = CreateIncidentDto {
            kind: String::new(),
            ..dto()
        };
        assert!(empty_kind.validate().is_err());

        let long_description = CreateIncidentDto {
            description: "x".repeat(2001),
            ..dto()
        };
        assert!(long_description.validate().is_err());
    }
}
