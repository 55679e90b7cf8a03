//! Data models for the temple administration console.
//!
//! These models match the frontend TypeScript interfaces exactly for
//! seamless interoperability with the persisted JSON collections.

mod announcement;
mod content;
mod contract;
mod devotee;
mod freelancer;

pub use announcement::*;
pub use content::*;
pub use contract::*;
pub use devotee::*;
pub use freelancer::*;

/// A record with a stable identity field.
///
/// `entity_id` is the sole merge key used by the overlay engine. Display
/// identifiers (e.g. `devoteeId`) are cosmetic and never used for matching.
pub trait Identified {
    fn entity_id(&self) -> &str;
}

/// Generate a fresh entity id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC instant as an RFC 3339 string.
///
/// Timestamps are always set by the caller at the moment of mutation; the
/// storage layer never stamps records.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn test_now_iso_parses_back() {
        let now = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
