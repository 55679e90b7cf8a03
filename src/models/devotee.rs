//! Devotee models matching the frontend Devotee and VIPDevotee interfaces.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Registration status of a devotee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DevoteeStatus {
    Active,
    Inactive,
}

impl DevoteeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevoteeStatus::Active => "active",
            DevoteeStatus::Inactive => "inactive",
        }
    }
}

/// VIP tier assigned to a devotee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VipLevel {
    Gold,
    Silver,
    Platinum,
}

impl VipLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VipLevel::Gold => "gold",
            VipLevel::Silver => "silver",
            VipLevel::Platinum => "platinum",
        }
    }
}

/// A registered devotee of the temple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Devotee {
    pub id: String,
    /// Display identifier shown in listings (e.g. "DEV-0042"); cosmetic only.
    pub devotee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: DevoteeStatus,
    pub registration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vip: Option<bool>,
}

impl Identified for Devotee {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// A devotee enrolled in the VIP program.
///
/// Serialized flat: the base devotee fields and the VIP fields share one
/// JSON object, matching the frontend shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VipDevotee {
    #[serde(flatten)]
    pub devotee: Devotee,
    pub vip_level: VipLevel,
    #[serde(default)]
    pub vip_services: Vec<String>,
    pub vip_since: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
}

impl Identified for VipDevotee {
    fn entity_id(&self) -> &str {
        &self.devotee.id
    }
}
