use axum::Json;
use sipesc_models::Referral;

use super::service::ReferralService;
use crate::middleware::auth::AuthUser;

#[utoipa::path(
    get,
    path = "/api/referrals",
    responses(
        (status = 200, description = "Referrals visible to the caller", body = Vec<Referral>),
        (status = 303, description = "Not signed in, or referrals module disabled")
    ),
    tag = "Referrals",
    security(("bearer_auth" = []))
)]
pub async fn get_referrals(auth_user: AuthUser) -> Json<Vec<Referral>> {
    Json(ReferralService::get_referrals(&auth_user))
}
