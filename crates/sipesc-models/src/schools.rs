//! Schools, guardianship councils and regions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{CouncilId, RegionId, SchoolId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub region_id: RegionId,
    /// Council that receives this school's referrals
    pub council_id: CouncilId,
    pub student_count: u32,
}

/// A guardianship council ("conselho tutelar").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Council {
    pub id: CouncilId,
    pub name: String,
    pub region_id: RegionId,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

/// A region together with the schools and councils located in it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegionOverview {
    #[serde(flatten)]
    pub region: Region,
    pub schools: Vec<School>,
    pub councils: Vec<Council>,
}
