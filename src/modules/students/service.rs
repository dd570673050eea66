use sipesc_core::AppError;
use sipesc_models::{SchoolId, Student, StudentFilterParams, mock};
use tracing::{debug, instrument, warn};

use crate::middleware::auth::AuthUser;

pub struct StudentService;

impl StudentService {
    /// Students of the schools the caller can see, narrowed by `filters`.
    ///
    /// Filtering on a school outside the caller's scope is refused rather than
    /// answered with an empty list.
    #[instrument(skip(auth_user), fields(user.id = %auth_user.principal.id))]
    pub fn get_students(
        auth_user: &AuthUser,
        filters: StudentFilterParams,
    ) -> Result<Vec<Student>, AppError> {
        let school_filter = filters.school_id.map(SchoolId::new);

        if let Some(school_id) = &school_filter
            && !auth_user.can_access_school(school_id)
        {
            warn!(school.id = %school_id, "Student filter outside caller scope");
            return Err(AppError::forbidden(format!(
                "Access denied to school {}",
                school_id
            )));
        }

        let students: Vec<Student> = mock::students()
            .into_iter()
            .filter(|s| auth_user.can_access_school(&s.school_id))
            .filter(|s| school_filter.as_ref().is_none_or(|id| &s.school_id == id))
            .filter(|s| filters.at_risk.is_none_or(|at_risk| s.at_risk == at_risk))
            .collect();

        debug!(count = students.len(), "Students visible to caller");
        Ok(students)
    }
}
