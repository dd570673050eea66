use anyhow::anyhow;
use sipesc_core::AppError;
use sipesc_models::{School, SchoolId, mock};
use tracing::{debug, instrument, warn};

use crate::middleware::auth::AuthUser;

pub struct SchoolService;

impl SchoolService {
    /// Schools visible to the caller.
    #[instrument(skip(auth_user), fields(user.id = %auth_user.principal.id))]
    pub fn get_schools(auth_user: &AuthUser) -> Vec<School> {
        let schools: Vec<School> = mock::schools()
            .into_iter()
            .filter(|school| auth_user.can_access_school(&school.id))
            .collect();
        debug!(count = schools.len(), "Schools visible to caller");
        schools
    }

    /// Out-of-scope ids answer 403 whether or not the school exists.
    #[instrument(skip(auth_user), fields(user.id = %auth_user.principal.id))]
    pub fn get_school(auth_user: &AuthUser, id: &SchoolId) -> Result<School, AppError> {
        if !auth_user.can_access_school(id) {
            warn!(school.id = %id, "School outside caller scope");
            return Err(AppError::forbidden(format!("Access denied to school {}", id)));
        }

        mock::schools()
            .into_iter()
            .find(|school| &school.id == id)
            .ok_or_else(|| AppError::not_found(anyhow!("School not found")))
    }
}
