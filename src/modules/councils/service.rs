use anyhow::anyhow;
use sipesc_core::AppError;
use sipesc_models::{Council, CouncilId, RegionId, RegionOverview, mock};
use tracing::{instrument, warn};

use crate::middleware::auth::AuthUser;

pub struct CouncilService;

impl CouncilService {
    #[instrument(skip(auth_user), fields(user.id = %auth_user.principal.id))]
    pub fn get_councils(auth_user: &AuthUser) -> Vec<Council> {
        mock::councils()
            .into_iter()
            .filter(|council| auth_user.can_access_council(&council.id))
            .collect()
    }

    #[instrument(skip(auth_user), fields(user.id = %auth_user.principal.id))]
    pub fn get_council(auth_user: &AuthUser, id: &CouncilId) -> Result<Council, AppError> {
        if !auth_user.can_access_council(id) {
            warn!(council.id = %id, "Council outside caller scope");
            return Err(AppError::forbidden(format!("Access denied to council {}", id)));
        }

        mock::councils()
            .into_iter()
            .find(|council| &council.id == id)
            .ok_or_else(|| AppError::not_found(anyhow!("Council not found")))
    }

    /// A region with the schools and councils in it that the caller may see.
    #[instrument(skip(auth_user), fields(user.id = %auth_user.principal.id))]
    pub fn get_region(auth_user: &AuthUser, id: &RegionId) -> Result<RegionOverview, AppError> {
        if !auth_user.can_access_region(id) {
            warn!(region.id = %id, "Region outside caller scope");
            return Err(AppError::forbidden(format!("Access denied to region {}", id)));
        }

        let region = mock::regions()
            .into_iter()
            .find(|region| &region.id == id)
            .ok_or_else(|| AppError::not_found(anyhow!("Region not found")))?;

        let schools = mock::schools()
            .into_iter()
            .filter(|s| s.region_id == region.id && auth_user.can_access_school(&s.id))
            .collect();
        let councils = mock::councils()
            .into_iter()
            .filter(|c| c.region_id == region.id && auth_user.can_access_council(&c.id))
            .collect();

        Ok(RegionOverview {
            region,
            schools,
            councils,
        })
    }
}
