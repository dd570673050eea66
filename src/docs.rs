use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use sipesc_models::{
    AccessSnapshot, Council, CreateIncidentDto, Incident, IncidentSeverity, LoginRequest,
    MessageResponse, Module, Principal, Referral, ReferralStatus, Region, RegionOverview, Role,
    School, Scoping, Session, Student, UpdateModulesDto,
};

use crate::modules::alerts::model::{Alert, AlertKind, AlertsResponse};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::bi::model::BiSummary;
use crate::modules::dashboard::model::DashboardSummary;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::get_session,
        crate::modules::auth::controller::get_access,
        crate::modules::dashboard::controller::get_dashboard,
        crate::modules::schools::controller::get_schools,
        crate::modules::schools::controller::get_school,
        crate::modules::councils::controller::get_councils,
        crate::modules::councils::controller::get_council,
        crate::modules::councils::controller::get_region,
        crate::modules::students::controller::get_students,
        crate::modules::incidents::controller::get_incidents,
        crate::modules::incidents::controller::create_incident,
        crate::modules::referrals::controller::get_referrals,
        crate::modules::alerts::controller::get_alerts,
        crate::modules::bi::controller::get_summary,
        crate::modules::admin::controller::get_users,
        crate::modules::admin::controller::update_user_modules,
    ),
    components(
        schemas(
            Principal,
            Scoping,
            Role,
            Module,
            Session,
            LoginRequest,
            MessageResponse,
            AccessSnapshot,
            UpdateModulesDto,
            School,
            Council,
            Region,
            RegionOverview,
            Student,
            Incident,
            IncidentSeverity,
            CreateIncidentDto,
            Referral,
            ReferralStatus,
            Alert,
            AlertKind,
            AlertsResponse,
            BiSummary,
            DashboardSummary,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Demo login, logout and the current session"),
        (name = "Dashboard", description = "Per-principal landing summary"),
        (name = "Schools", description = "Schools visible to the principal"),
        (name = "Councils", description = "Guardianship councils and regions"),
        (name = "Students", description = "Students within the principal's scope"),
        (name = "Incidents", description = "Incident records"),
        (name = "Referrals", description = "Referrals to the protection network"),
        (name = "Alerts", description = "Early-warning alerts"),
        (name = "BI", description = "Aggregated indicators"),
        (name = "Admin", description = "Module administration for demo accounts")
    ),
    info(
        title = "SIPESC API",
        version = "0.1.0",
        description = "Role-based access control for the school protection network, built with Rust and Axum.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/login",
            "/api/auth/logout",
            "/api/auth/session",
            "/api/auth/access",
            "/api/dashboard",
            "/api/schools",
            "/api/councils/{id}",
            "/api/regions/{id}",
            "/api/students",
            "/api/incidents",
            "/api/referrals",
            "/api/alerts",
            "/api/bi/summary",
            "/api/admin/users/{id}/modules",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
