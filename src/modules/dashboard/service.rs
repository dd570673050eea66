use sipesc_models::{Module, mock};
use tracing::instrument;

use super::model::DashboardSummary;
use crate::middleware::auth::AuthUser;
use crate::modules::incidents::service::IncidentLog;

pub struct DashboardService;

impl DashboardService {
    #[instrument(skip(log, auth_user), fields(user.id = %auth_user.principal.id))]
    pub async fn get_summary(log: &IncidentLog, auth_user: &AuthUser) -> DashboardSummary {
        let principal = &auth_user.principal;

        let modules = Module::ALL
            .into_iter()
            .filter(|m| auth_user.is_module_enabled(*m))
            .collect();

        let schools = mock::schools()
            .iter()
            .filter(|s| auth_user.can_access_school(&s.id))
            .count();
        let students = mock::students()
            .iter()
            .filter(|s| auth_user.can_access_school(&s.school_id))
            .count();
        let incidents = log
            .all()
            .await
            .iter()
            .filter(|i| auth_user.can_access_school(&i.school_id))
            .count();
        let referrals = mock::referrals()
            .iter()
            .filter(|r| {
                auth_user.can_access_school(&r.school_id)
                    || auth_user.can_access_council(&r.council_id)
            })
            .count();

        DashboardSummary {
            name: principal.name.clone(),
            role: principal.role,
            full_access: auth_user.has_full_access(),
            modules,
            schools,
            students,
            incidents,
            referrals,
        }
    }
}
