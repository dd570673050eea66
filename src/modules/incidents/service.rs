use anyhow::anyhow;
use chrono::Utc;
use sipesc_core::AppError;
use sipesc_models::{
    CreateIncidentDto, Incident, IncidentId, IncidentSeverity, SchoolId, StudentId, mock,
};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::metrics;
use crate::middleware::auth::AuthUser;

/// Incidents recorded since startup, seeded with the static records.
#[derive(Debug)]
pub struct IncidentLog {
    records: RwLock<Vec<Incident>>,
}

impl IncidentLog {
    pub fn seeded() -> Self {
        Self {
            records: RwLock::new(mock::incidents()),
        }
    }

    pub async fn all(&self) -> Vec<Incident> {
        self.records.read().await.clone()
    }

    pub async fn push(&self, incident: Incident) {
        self.records.write().await.push(incident);
    }
}

fn severity_label(severity: IncidentSeverity) -> &'static str {
    match severity {
        IncidentSeverity::Low => "low",
        IncidentSeverity::Medium => "medium",
        IncidentSeverity::High => "high",
    }
}

pub struct IncidentService;

impl IncidentService {
    #[instrument(skip(log, auth_user), fields(user.id = %auth_user.principal.id))]
    pub async fn get_incidents(log: &IncidentLog, auth_user: &AuthUser) -> Vec<Incident> {
        log.all()
            .await
            .into_iter()
            .filter(|incident| auth_user.can_access_school(&incident.school_id))
            .collect()
    }

    /// Records an incident for a school the caller can see.
    ///
    /// A referenced student must exist and belong to that school.
    #[instrument(skip(log, auth_user, dto), fields(user.id = %auth_user.principal.id, school.id = %dto.school_id))]
    pub async fn create_incident(
        log: &IncidentLog,
        auth_user: &AuthUser,
        dto: CreateIncidentDto,
    ) -> Result<Incident, AppError> {
        let school_id = SchoolId::new(dto.school_id.trim());

        if !auth_user.can_access_school(&school_id) {
            warn!("Incident for school outside caller scope");
            return Err(AppError::forbidden(format!(
                "Access denied to school {}",
                school_id
            )));
        }

        if !mock::schools().iter().any(|s| s.id == school_id) {
            return Err(AppError::not_found(anyhow!("School not found")));
        }

        let student_id = match dto.student_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(id) => {
                let student_id = StudentId::new(id);
                let belongs = mock::students()
                    .iter()
                    .any(|s| s.id == student_id && s.school_id == school_id);
                if !belongs {
                    return Err(AppError::unprocessable(anyhow!(
                        "Student {} is not enrolled in school {}",
                        student_id,
                        school_id
                    )));
                }
                Some(student_id)
            }
        };

        let id = uuid::Uuid::new_v4().simple().to_string();
        let incident = Incident {
            id: IncidentId::new(format!("inc-{}", &id[..8])),
            school_id,
            student_id,
            kind: dto.kind.trim().to_string(),
            description: dto.description.trim().to_string(),
            severity: dto.severity,
            occurred_on: dto.occurred_on.unwrap_or_else(|| Utc::now().date_naive()),
            reported_by: auth_user.principal.id.to_string(),
        };

        log.push(incident.clone()).await;
        metrics::track_incident_recorded(severity_label(incident.severity));
        info!(incident.id = %incident.id, "Incident recorded");

        Ok(incident)
    }
}
