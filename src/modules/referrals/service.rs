use sipesc_models::{Referral, mock};
use tracing::instrument;

use crate::middleware::auth::AuthUser;

pub struct ReferralService;

impl ReferralService {
    /// Referrals sent by a school the caller can see or received by a council it can see.
    #[instrument(skip(auth_user), fields(user.id = %auth_user.principal.id))]
    pub fn get_referrals(auth_user: &AuthUser) -> Vec<Referral> {
        mock::referrals()
            .into_iter()
            .filter(|r| {
                auth_user.can_access_school(&r.school_id)
                    || auth_user.can_access_council(&r.council_id)
            })
            .collect()
    }
}
