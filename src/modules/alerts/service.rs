use sipesc_models::{IncidentSeverity, mock};
use tracing::instrument;

use super::model::{Alert, AlertKind};
use crate::middleware::auth::AuthUser;
use crate::modules::incidents::service::IncidentLog;

pub struct AlertService;

impl AlertService {
    #[instrument(skip(log, auth_user), fields(user.id = %auth_user.principal.id))]
    pub async fn get_alerts(log: &IncidentLog, auth_user: &AuthUser) -> Vec<Alert> {
        let attendance = mock::students()
            .into_iter()
            .filter(|s| auth_user.can_access_school(&s.school_id))
            .filter(|s| s.at_risk)
            .map(|s| Alert {
                kind: AlertKind::LowAttendance,
                message: format!("{} has {}% attendance", s.name, s.attendance_rate),
                school_id: s.school_id,
                student_id: Some(s.id),
                incident_id: None,
            });

        let incidents = log
            .all()
            .await
            .into_iter()
            .filter(|i| i.severity == IncidentSeverity::High)
            .filter(|i| auth_user.can_access_school(&i.school_id))
            .map(|i| Alert {
                kind: AlertKind::HighSeverityIncident,
                message: format!("High severity incident: {}", i.kind),
                school_id: i.school_id,
                student_id: i.student_id,
                incident_id: Some(i.id),
            });

        attendance.chain(incidents).collect()
    }
}
