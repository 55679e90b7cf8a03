//! Freelancer model matching the frontend Freelancer interface.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Engagement status of a freelancer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FreelancerStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
    #[serde(rename = "on-contract")]
    OnContract,
}

impl FreelancerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreelancerStatus::Active => "active",
            FreelancerStatus::Inactive => "inactive",
            FreelancerStatus::OnContract => "on-contract",
        }
    }
}

/// A freelancer engaged for temple services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freelancer {
    pub id: String,
    /// Display identifier shown in listings (e.g. "FRL-0007"); cosmetic only.
    pub freelancer_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub status: FreelancerStatus,
    pub join_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_projects: Option<i64>,
}

impl Identified for Freelancer {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
