use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{CouncilId, ReferralId, SchoolId, StudentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    Pending,
    InProgress,
    Resolved,
}

/// A case forwarded from a school to a guardianship council.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Referral {
    pub id: ReferralId,
    pub student_id: StudentId,
    pub school_id: SchoolId,
    pub council_id: CouncilId,
    pub reason: String,
    pub status: ReferralStatus,
    pub created_on: NaiveDate,
}
