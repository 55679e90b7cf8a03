//! Content model matching the frontend Content interface.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Kind of published content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentType {
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "notice")]
    Notice,
    #[serde(rename = "information")]
    Information,
    #[serde(rename = "ritual-guide")]
    RitualGuide,
    #[serde(rename = "temple-information")]
    TempleInformation,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Event => "event",
            ContentType::Notice => "notice",
            ContentType::Information => "information",
            ContentType::RitualGuide => "ritual-guide",
            ContentType::TempleInformation => "temple-information",
        }
    }
}

/// Editorial status of a content item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentStatus {
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "under-review")]
    UnderReview,
    #[serde(rename = "published")]
    Published,
    #[serde(rename = "archived")]
    Archived,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::UnderReview => "under-review",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }
}

/// An article, notice, or guide managed through the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: String,
    pub title: String,
    /// Rich text / HTML body.
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub language: String,
    pub author_id: String,
    pub author_name: String,
    /// Monotonically incrementing revision counter.
    #[serde(default)]
    pub version: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
}

impl Content {
    /// Mark an edit: bumps `version` by exactly 1 and stamps `updated_at`.
    ///
    /// The version never decreases and never skips on a single update;
    /// callers record every edit through this method.
    pub fn record_update(&mut self, now: String) {
        self.version += 1;
        self.updated_at = now;
    }
}

impl Identified for Content {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Content {
        Content {
            id: "c-1".to_string(),
            title: "Kartik Purnima Schedule".to_string(),
            content: "<p>Evening aarti at 7pm.</p>".to_string(),
            content_type: ContentType::Event,
            status: ContentStatus::Draft,
            language: "en".to_string(),
            author_id: "u-1".to_string(),
            author_name: "Priya Sharma".to_string(),
            version: 1,
            created_at: "2024-11-01T10:00:00+00:00".to_string(),
            updated_at: "2024-11-01T10:00:00+00:00".to_string(),
            published_at: None,
            approved_by: None,
            approved_at: None,
        }
    }

    #[test]
    fn test_record_update_bumps_version_by_one() {
        let mut content = sample();
        content.record_update("2024-11-02T09:00:00+00:00".to_string());
        assert_eq!(content.version, 2);
        assert_eq!(content.updated_at, "2024-11-02T09:00:00+00:00");
        content.record_update("2024-11-03T09:00:00+00:00".to_string());
        assert_eq!(content.version, 3);
    }

    #[test]
    fn test_type_field_wire_name() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "event");
        assert_eq!(value["status"], "draft");
    }
}
