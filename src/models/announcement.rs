//! Announcement and delivery log models matching the frontend interfaces.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Target audience of an announcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    All,
    Devotees,
    Volunteers,
    Employees,
    Custom,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Devotees => "devotees",
            Audience::Volunteers => "volunteers",
            Audience::Employees => "employees",
            Audience::Custom => "custom",
        }
    }
}

/// Lifecycle status of an announcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementStatus {
    Draft,
    Scheduled,
    Sent,
    Cancelled,
}

impl AnnouncementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementStatus::Draft => "draft",
            AnnouncementStatus::Scheduled => "scheduled",
            AnnouncementStatus::Sent => "sent",
            AnnouncementStatus::Cancelled => "cancelled",
        }
    }
}

/// A broadcast message to a segment of the community.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub message: String,
    pub audience: Audience,
    pub status: AnnouncementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub created_by_name: String,
}

impl Identified for Announcement {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Kind of recipient a delivery was addressed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    Devotee,
    Volunteer,
    Employee,
}

impl RecipientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientType::Devotee => "devotee",
            RecipientType::Volunteer => "volunteer",
            RecipientType::Employee => "employee",
        }
    }
}

/// Outcome of a single delivery attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Failed => "failed",
        }
    }
}

/// Per-recipient delivery record for an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLog {
    pub id: String,
    /// Identity of the announcement this delivery belongs to.
    pub announcement_id: String,
    pub recipient_id: String,
    pub recipient_type: RecipientType,
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_reason: Option<String>,
    pub timestamp: String,
}

impl Identified for DeliveryLog {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
