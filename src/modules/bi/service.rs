use std::collections::BTreeMap;

use serde::Serialize;
use sipesc_models::mock;
use tracing::instrument;

use super::model::BiSummary;
use crate::middleware::auth::AuthUser;
use crate::modules::incidents::service::IncidentLog;

/// Serialized form of a unit enum variant, used as a map key.
fn label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

pub struct BiService;

impl BiService {
    #[instrument(skip(log, auth_user), fields(user.id = %auth_user.principal.id))]
    pub async fn get_summary(log: &IncidentLog, auth_user: &AuthUser) -> BiSummary {
        let schools = mock::schools()
            .into_iter()
            .filter(|s| auth_user.can_access_school(&s.id))
            .count();

        let students: Vec<_> = mock::students()
            .into_iter()
            .filter(|s| auth_user.can_access_school(&s.school_id))
            .collect();
        let students_at_risk = students.iter().filter(|s| s.at_risk).count();
        let average_attendance = (!students.is_empty()).then(|| {
            let total: u32 = students.iter().map(|s| u32::from(s.attendance_rate)).sum();
            f64::from(total) / students.len() as f64
        });

        let mut incidents_by_severity = BTreeMap::new();
        for incident in log.all().await {
            if auth_user.can_access_school(&incident.school_id) {
                *incidents_by_severity
                    .entry(label(&incident.severity))
                    .or_insert(0) += 1;
            }
        }

        let mut referrals_by_status = BTreeMap::new();
        for referral in mock::referrals() {
            if auth_user.can_access_school(&referral.school_id)
                || auth_user.can_access_council(&referral.council_id)
            {
                *referrals_by_status.entry(label(&referral.status)).or_insert(0) += 1;
            }
        }

        BiSummary {
            schools,
            students: students.len(),
            students_at_risk,
            average_attendance,
            incidents_by_severity,
            referrals_by_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sipesc_models::{IncidentSeverity, ReferralStatus};

    #[test]
    fn test_label_uses_serde_names() {
        assert_eq!(label(&IncidentSeverity::High), "high");
        assert_eq!(label(&ReferralStatus::InProgress), "in_progress");
    }
}
