use serde::Serialize;
use sipesc_models::{Module, Role};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub name: String,
    pub role: Role,
    pub full_access: bool,
    /// Modules the navigation should show
    pub modules: Vec<Module>,
    pub schools: usize,
    pub students: usize,
    pub incidents: usize,
    pub referrals: usize,
}
