//! Profile list persistence.
//!
//! Profiles live as one JSON array under [`PROFILES_KEY`]. Every mutation is a
//! read-modify-write of the whole list; the returned list is what was written,
//! so callers only swap their in-memory copy after a successful write.

use super::KeyValueStore;
use crate::model::{Profile, ProfileError, ProfileId, Settings, StorageError};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Key under which the profile list is stored.
pub const PROFILES_KEY: &str = "pinhole.profiles";

/// Profile CRUD over any [`KeyValueStore`].
#[derive(Debug)]
pub struct ProfileStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read every stored profile. A store without the key holds no profiles.
    pub fn load(&self) -> Result<Vec<Profile>, StorageError> {
        let Some(raw) = self.store.get(PROFILES_KEY)? else {
            return Ok(Vec::new());
        };

        let profiles: Vec<Profile> =
            serde_json::from_str(&raw).map_err(|e| StorageError::CorruptValue {
                key: PROFILES_KEY.to_string(),
                reason: e.to_string(),
            })?;
        debug!(count = profiles.len(), "Profiles loaded");
        Ok(profiles)
    }

    fn save_all(&mut self, profiles: &[Profile]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profiles)?;
        self.store.set(PROFILES_KEY, &raw)
    }

    /// Look up a single profile.
    pub fn get(&self, id: &ProfileId) -> Result<Profile, ProfileError> {
        self.load()?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| ProfileError::NotFound(id.clone()))
    }

    /// Snapshot `settings` as a new profile named `name`.
    ///
    /// Returns the full list as written.
    ///
    /// # Errors
    ///
    /// `EmptyName` for a blank name; storage errors from the read or write.
    pub fn create(
        &mut self,
        name: &str,
        settings: &Settings,
        now: DateTime<Utc>,
    ) -> Result<Vec<Profile>, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let mut profiles = self.load()?;
        let id = ProfileId::generate(now, &profiles);
        profiles.push(Profile::snapshot(id.clone(), name, now, settings));
        self.save_all(&profiles)?;

        info!(id = %id, name, "Profile created");
        Ok(profiles)
    }

    /// Overwrite the camera fields of profile `id` with `settings`.
    pub fn update(
        &mut self,
        id: &ProfileId,
        settings: &Settings,
    ) -> Result<Vec<Profile>, ProfileError> {
        let mut profiles = self.load()?;
        let slot = profiles
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ProfileError::NotFound(id.clone()))?;
        *slot = slot.updated_from(settings);
        self.save_all(&profiles)?;

        info!(id = %id, "Profile updated");
        Ok(profiles)
    }

    /// Remove profile `id`.
    pub fn delete(&mut self, id: &ProfileId) -> Result<Vec<Profile>, ProfileError> {
        let mut profiles = self.load()?;
        let before = profiles.len();
        profiles.retain(|p| &p.id != id);
        if profiles.len() == before {
            return Err(ProfileError::NotFound(id.clone()));
        }
        self.save_all(&profiles)?;

        info!(id = %id, "Profile deleted");
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    /// Store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                path: "broken".into(),
                source: std::io::Error::other("read failed"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "broken".into(),
                source: std::io::Error::other("write failed"),
            })
        }
    }

    #[test]
    fn empty_store_loads_no_profiles() {
        let store = ProfileStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn create_then_load_round_trips() {
        let mut store = ProfileStore::new(MemoryStore::new());
        let settings = Settings::default().with_iso(400);

        let written = store.create("  Zero 2000  ", &settings, at(1000)).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(written, loaded);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Zero 2000");
        assert_eq!(loaded[0].iso, 400);
        assert_eq!(loaded[0].id.as_str(), "1000");
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut store = ProfileStore::new(MemoryStore::new());
        let result = store.create("   ", &Settings::default(), at(1));
        assert!(matches!(result, Err(ProfileError::EmptyName)));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn create_at_same_instant_gets_distinct_ids() {
        let mut store = ProfileStore::new(MemoryStore::new());
        store.create("a", &Settings::default(), at(5)).unwrap();
        let profiles = store.create("b", &Settings::default(), at(5)).unwrap();
        assert_eq!(profiles[0].id.as_str(), "5");
        assert_eq!(profiles[1].id.as_str(), "5-2");
    }

    #[test]
    fn update_replaces_camera_fields_only() {
        let mut store = ProfileStore::new(MemoryStore::new());
        let created = store.create("body", &Settings::default(), at(7)).unwrap();
        let id = created[0].id.clone();

        let updated = store
            .update(&id, &Settings::default().with_focal_length(75.0))
            .unwrap();

        assert_eq!(updated[0].focal_length, 75.0);
        assert_eq!(updated[0].name, "body");
        assert_eq!(updated[0].created_at, at(7));
    }

    #[test]
    fn delete_removes_profile() {
        let mut store = ProfileStore::new(MemoryStore::new());
        store.create("a", &Settings::default(), at(1)).unwrap();
        let created = store.create("b", &Settings::default(), at(2)).unwrap();

        let remaining = store.delete(&created[0].id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "b");
    }

    #[test]
    fn delete_unknown_is_not_found() {
        let mut store = ProfileStore::new(MemoryStore::new());
        let id = ProfileId::new("missing").unwrap();
        assert!(matches!(store.delete(&id), Err(ProfileError::NotFound(_))));
        assert!(matches!(store.get(&id), Err(ProfileError::NotFound(_))));
    }

    #[test]
    fn corrupt_value_is_reported() {
        let mut backing = MemoryStore::new();
        backing.set(PROFILES_KEY, "{\"not\":\"a list\"}").unwrap();
        let store = ProfileStore::new(backing);

        match store.load() {
            Err(StorageError::CorruptValue { key, .. }) => assert_eq!(key, PROFILES_KEY),
            other => panic!("Expected CorruptValue, got {:?}", other),
        }
    }

    #[test]
    fn broken_store_propagates_errors() {
        let mut store = ProfileStore::new(BrokenStore);
        assert!(store.load().is_err());
        assert!(matches!(
            store.create("x", &Settings::default(), at(1)),
            Err(ProfileError::Storage(_))
        ));
    }
}
