//! Temple Console Data Overlay Store
//!
//! Client-side persistence for the temple administration dashboard: an
//! overlay merge engine that layers locally-persisted user edits onto
//! static seed collections, plus the entity façades and small utilities
//! (time-block bucketing, privacy masking) the console pages use.
//!
//! The UI layer calls `load_*` on page mount with the seed collection and
//! `save_*` with the entire recomputed collection after every mutation;
//! the backing store holds what the user changed, the seed data is the
//! reset baseline.

pub mod auth;
pub mod config;
pub mod datastore;
pub mod errors;
pub mod models;
pub mod overlay;
pub mod privacy;
pub mod schedule;
pub mod seed;
pub mod store;

pub use config::StoreConfig;
pub use datastore::{namespaces, TempleDataStore};
pub use errors::StorageError;
pub use models::Identified;
pub use overlay::OverlayStore;
pub use store::{FileStore, KeyValueStore, MemoryStore, UnavailableStore};

#[cfg(test)]
mod tests;
