use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Aggregates over the data visible to the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct BiSummary {
    pub schools: usize,
    pub students: usize,
    pub students_at_risk: usize,
    /// Average attendance in percent, `None` without students
    pub average_attendance: Option<f64>,
    pub incidents_by_severity: BTreeMap<String, usize>,
    pub referrals_by_status: BTreeMap<String, usize>,
}
