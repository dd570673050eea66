use serde::Serialize;
use serde_json::{Value, json};
use sipesc_models::{IncidentId, SchoolId, StudentId};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowAttendance,
    HighSeverityIncident,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Alert {
    pub kind: AlertKind,
    pub school_id: SchoolId,
    pub student_id: Option<StudentId>,
    pub incident_id: Option<IncidentId>,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    /// `false` when the alerts module is disabled for the caller
    pub module_enabled: bool,
}

/// Served instead of a redirect when the alerts module is off.
pub fn disabled_payload() -> Value {
    json!({ "alerts": [], "module_enabled": false })
}
