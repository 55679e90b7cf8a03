//! Entity-specific façades over the overlay merge engine.
//!
//! One `save_*`/`load_*` pair per entity type, each binding the generic
//! engine to a fixed namespace key. No validation or business logic lives
//! here; pages call `load_*` with the seed collection on mount and
//! `save_*` with the entire recomputed collection after every mutation.

use crate::models::{
    Announcement, Content, Contract, DeliveryLog, Devotee, Freelancer, VipDevotee,
};
use crate::overlay::OverlayStore;
use crate::store::KeyValueStore;

/// Namespace keys, one JSON array per key in the backing store.
pub mod namespaces {
    pub const DEVOTEES: &str = "devotees";
    pub const VIP_DEVOTEES: &str = "vip_devotees";
    pub const FREELANCERS: &str = "freelancers";
    pub const FREELANCER_CONTRACTS: &str = "freelancer_contracts";
    pub const CONTENT: &str = "content";
    pub const ANNOUNCEMENTS: &str = "announcements";
    pub const DELIVERY_LOGS: &str = "delivery_logs";
}

/// Typed entry point for all console data.
pub struct TempleDataStore<S: KeyValueStore> {
    overlay: OverlayStore<S>,
}

impl<S: KeyValueStore> TempleDataStore<S> {
    pub fn new(backing: S) -> Self {
        Self {
            overlay: OverlayStore::new(backing),
        }
    }

    pub fn save_devotees(&self, collection: &[Devotee]) {
        self.overlay.persist(namespaces::DEVOTEES, collection);
    }

    pub fn load_devotees(&self, seed: &[Devotee]) -> Vec<Devotee> {
        self.overlay.overlay(seed, namespaces::DEVOTEES)
    }

    pub fn save_vip_devotees(&self, collection: &[VipDevotee]) {
        self.overlay.persist(namespaces::VIP_DEVOTEES, collection);
    }

    pub fn load_vip_devotees(&self, seed: &[VipDevotee]) -> Vec<VipDevotee> {
        self.overlay.overlay(seed, namespaces::VIP_DEVOTEES)
    }

    pub fn save_freelancers(&self, collection: &[Freelancer]) {
        self.overlay.persist(namespaces::FREELANCERS, collection);
    }

    pub fn load_freelancers(&self, seed: &[Freelancer]) -> Vec<Freelancer> {
        self.overlay.overlay(seed, namespaces::FREELANCERS)
    }

    pub fn save_contracts(&self, collection: &[Contract]) {
        self.overlay
            .persist(namespaces::FREELANCER_CONTRACTS, collection);
    }

    pub fn load_contracts(&self, seed: &[Contract]) -> Vec<Contract> {
        self.overlay.overlay(seed, namespaces::FREELANCER_CONTRACTS)
    }

    pub fn save_content(&self, collection: &[Content]) {
        self.overlay.persist(namespaces::CONTENT, collection);
    }

    pub fn load_content(&self, seed: &[Content]) -> Vec<Content> {
        self.overlay.overlay(seed, namespaces::CONTENT)
    }

    pub fn save_announcements(&self, collection: &[Announcement]) {
        self.overlay.persist(namespaces::ANNOUNCEMENTS, collection);
    }

    pub fn load_announcements(&self, seed: &[Announcement]) -> Vec<Announcement> {
        self.overlay.overlay(seed, namespaces::ANNOUNCEMENTS)
    }

    pub fn save_delivery_logs(&self, collection: &[DeliveryLog]) {
        self.overlay.persist(namespaces::DELIVERY_LOGS, collection);
    }

    pub fn load_delivery_logs(&self, seed: &[DeliveryLog]) -> Vec<DeliveryLog> {
        self.overlay.overlay(seed, namespaces::DELIVERY_LOGS)
    }
}
