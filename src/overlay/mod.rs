//! Overlay merge engine.
//!
//! Merges a namespaced JSON array read from the backing store against a
//! supplied seed collection by identity, and serializes full collections
//! back under their namespace. The seed collection is the base layer;
//! whatever is stored under the namespace wins field-by-field.
//!
//! The `try_*` operations return `Result` so embedders can surface
//! failures; the `persist`/`overlay` adapters absorb every error and
//! degrade to "write skipped" / "seed data unchanged".
//!
//! There is no schema-version field in the stored arrays. Fields added to
//! an entity after records were persisted must be `Option` with
//! `#[serde(default)]` so older stored records keep deserializing.

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::StorageError;
use crate::models::Identified;
use crate::store::KeyValueStore;

/// Overlay store binding the merge engine to a backing store.
pub struct OverlayStore<S: KeyValueStore> {
    backing: S,
}

impl<S: KeyValueStore> OverlayStore<S> {
    pub fn new(backing: S) -> Self {
        Self { backing }
    }

    /// Serialize `collection` and replace the entire value stored under
    /// `namespace` with it.
    pub fn try_persist<T: Serialize>(
        &self,
        namespace: &str,
        collection: &[T],
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(collection)?;
        self.backing.set(namespace, &raw)
    }

    /// Best-effort persist: failures are logged and swallowed, so a save
    /// is silent to the caller whether or not it reached the store.
    pub fn persist<T: Serialize>(&self, namespace: &str, collection: &[T]) {
        if let Err(err) = self.try_persist(namespace, collection) {
            tracing::warn!(namespace, error = %err, "persist skipped");
        }
    }

    /// Merge the collection stored under `namespace` onto `seed`.
    ///
    /// Seed order is preserved, with each seed entity shallow-merged
    /// against the stored entity sharing its id (stored fields win).
    /// Stored entities whose id is absent from the seed are appended at
    /// the end in their stored order. Neither input is mutated.
    pub fn try_overlay<T>(&self, seed: &[T], namespace: &str) -> Result<Vec<T>, StorageError>
    where
        T: Identified + Serialize + DeserializeOwned + Clone,
    {
        let Some(raw) = self.backing.get(namespace)? else {
            return Ok(seed.to_vec());
        };

        let stored = parse_stored_objects(&raw)?;

        // Identity index over the stored collection; first occurrence wins.
        let mut by_id: HashMap<&str, &Map<String, Value>> = HashMap::new();
        for (id, object) in &stored {
            by_id.entry(id.as_str()).or_insert(object);
        }

        let seed_ids: HashSet<&str> = seed.iter().map(Identified::entity_id).collect();
        let mut result = Vec::with_capacity(seed.len());

        for entity in seed {
            match by_id.get(entity.entity_id()) {
                Some(&stored_object) => {
                    result.push(merge_entity(entity, stored_object, namespace)?);
                }
                None => result.push(entity.clone()),
            }
        }

        // Pure user-created additions, in stored relative order.
        let mut appended: HashSet<&str> = HashSet::new();
        for (id, object) in &stored {
            if seed_ids.contains(id.as_str()) || !appended.insert(id.as_str()) {
                continue;
            }
            match serde_json::from_value::<T>(Value::Object(object.clone())) {
                Ok(entity) => result.push(entity),
                Err(err) => {
                    tracing::warn!(namespace, id = id.as_str(), error = %err,
                        "skipping stored-only record that no longer deserializes");
                }
            }
        }

        Ok(result)
    }

    /// Silent read adapter: any failure (store unavailable, unparsable
    /// stored string) is logged and the seed is returned unchanged.
    pub fn overlay<T>(&self, seed: &[T], namespace: &str) -> Vec<T>
    where
        T: Identified + Serialize + DeserializeOwned + Clone,
    {
        match self.try_overlay(seed, namespace) {
            Ok(merged) => merged,
            Err(err) => {
                tracing::warn!(namespace, error = %err, "overlay fell back to seed data");
                seed.to_vec()
            }
        }
    }
}

/// Parse the raw stored string into `(id, object)` pairs in stored order.
/// Array entries that are not objects or carry no string `id` are dropped.
fn parse_stored_objects(raw: &str) -> Result<Vec<(String, Map<String, Value>)>, StorageError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = value else {
        return Err(StorageError::Serialization(
            "stored value is not a JSON array".to_string(),
        ));
    };

    let mut objects = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(object) = item else {
            tracing::warn!("dropping non-object entry in stored collection");
            continue;
        };
        let Some(id) = object.get("id").and_then(Value::as_str).map(String::from) else {
            tracing::warn!("dropping stored entry without a string id");
            continue;
        };
        objects.push((id, object));
    }
    Ok(objects)
}

/// Shallow merge: every field present on the stored object overrides the
/// corresponding seed field; fields absent from it keep the seed value.
/// If the merged object no longer deserializes into `T`, the seed entity
/// is kept as-is.
fn merge_entity<T>(
    seed_entity: &T,
    stored_object: &Map<String, Value>,
    namespace: &str,
) -> Result<T, StorageError>
where
    T: Identified + Serialize + DeserializeOwned + Clone,
{
    let Value::Object(mut merged) = serde_json::to_value(seed_entity)? else {
        return Err(StorageError::Serialization(
            "seed entity did not serialize to a JSON object".to_string(),
        ));
    };
    for (key, value) in stored_object {
        merged.insert(key.clone(), value.clone());
    }

    match serde_json::from_value::<T>(Value::Object(merged)) {
        Ok(entity) => Ok(entity),
        Err(err) => {
            tracing::warn!(namespace, id = seed_entity.entity_id(), error = %err,
                "stored override no longer deserializes; keeping seed record");
            Ok(seed_entity.clone())
        }
    }
}
