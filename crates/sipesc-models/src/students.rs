use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{SchoolId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub school_id: SchoolId,
    pub grade: String,
    pub birth_date: NaiveDate,
    pub guardian_name: String,
    /// Attendance over the current term, in percent
    pub attendance_rate: u8,
    pub at_risk: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StudentFilterParams {
    /// Restrict to one school (must be accessible to the caller)
    #[serde(default, deserialize_with = "sipesc_core::serde::deserialize_optional_string")]
    pub school_id: Option<String>,
    /// Only students flagged as at risk
    #[serde(default)]
    pub at_risk: Option<bool>,
}
