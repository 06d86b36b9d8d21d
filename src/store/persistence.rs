//! Typed, best-effort access to the key-value store.
//!
//! Reads never fail: absent or malformed values fall back to defaults.
//! Writes never fail either: errors are logged and the in-memory state
//! stays authoritative for the rest of the session.

use log::{debug, warn};
use serde_json::Value;

use super::{KeyValueStore, StoreKey};
use crate::models::{CandidateList, ExclusionSet};

/// Seed list used when no usable candidate list is stored
pub const DEFAULT_NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "David", "Emma", "Frank", "Grace", "Henry",
];

/// Header shown until the user picks another one
pub const DEFAULT_HEADER: &str = "🎡 Wheel of Names";

pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the candidate list. A missing, empty or non-array value is
    /// replaced by the seed list, which is written back. Unparsable JSON
    /// also yields the seed list but leaves the stored value alone.
    pub fn load_candidates(&mut self) -> CandidateList {
        let Some(raw) = self.read(StoreKey::CandidateList) else {
            return self.seed_candidates();
        };
        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                warn!("Stored candidate list is not an array: {}", other);
                return self.seed_candidates();
            }
            Err(err) => {
                warn!("Falling back to seed candidate list: {}", err);
                return default_candidates();
            }
        };

        let list = CandidateList::from_names(items.into_iter().filter_map(|item| match item {
            Value::String(name) => Some(name),
            other => {
                debug!("Skipping non-string candidate {}", other);
                None
            }
        }));
        if list.is_empty() {
            debug!("Stored candidate list is empty, using seed list");
            return self.seed_candidates();
        }
        list
    }

    pub fn save_candidates(&mut self, list: &CandidateList) {
        self.write_json(StoreKey::CandidateList, list);
    }

    pub fn load_exclusions(&self) -> ExclusionSet {
        let Some(raw) = self.read(StoreKey::ExclusionSet) else {
            return ExclusionSet::default();
        };
        match serde_json::from_str::<ExclusionSet>(&raw) {
            Ok(set) => set,
            Err(err) => {
                warn!("Falling back to empty exclusion set: {}", err);
                ExclusionSet::default()
            }
        }
    }

    pub fn save_exclusions(&mut self, set: &ExclusionSet) {
        self.write_json(StoreKey::ExclusionSet, set);
    }

    pub fn load_header(&self) -> String {
        match self.read(StoreKey::HeaderText) {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_HEADER.to_string(),
        }
    }

    pub fn save_header(&mut self, text: &str) {
        self.write(StoreKey::HeaderText, text);
    }

    #[cfg(test)]
    pub fn raw(&self, key: StoreKey) -> Option<String> {
        self.read(key)
    }

    fn seed_candidates(&mut self) -> CandidateList {
        let list = default_candidates();
        self.save_candidates(&list);
        list
    }

    fn read(&self, key: StoreKey) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to read {}: {}", key.as_str(), err);
                None
            }
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&mut self, key: StoreKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.write(key, &json),
            Err(err) => warn!("Failed to serialize {}: {}", key.as_str(), err),
        }
    }

    fn write(&mut self, key: StoreKey, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("Failed to persist {}: {}", key.as_str(), err);
        }
    }
}

fn default_candidates() -> CandidateList {
    CandidateList::from_names(DEFAULT_NAMES.iter().map(|name| name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    /// Store whose writes always fail, reads return nothing
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: StoreKey) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }

        fn set(&mut self, _key: StoreKey, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("quota exceeded")))
        }
    }

    fn store_with(key: StoreKey, value: &str) -> Persistence {
        let mut store = MemoryStore::new();
        store.set(key, value).unwrap();
        Persistence::new(Box::new(store))
    }

    #[test]
    fn test_missing_candidates_seed_and_persist() {
        let mut persistence = Persistence::new(Box::new(MemoryStore::new()));
        let list = persistence.load_candidates();
        assert_eq!(list.names(), DEFAULT_NAMES);
        assert_eq!(
            persistence.raw(StoreKey::CandidateList),
            Some(seed_json())
        );
    }

    fn seed_json() -> String {
        serde_json::to_string(&DEFAULT_NAMES).unwrap()
    }

    #[test]
    fn test_malformed_candidates_fall_back_without_writing() {
        let mut persistence = store_with(StoreKey::CandidateList, "{ not json");
        assert_eq!(persistence.load_candidates().names(), DEFAULT_NAMES);
        assert_eq!(
            persistence.raw(StoreKey::CandidateList).as_deref(),
            Some("{ not json")
        );
    }

    #[test]
    fn test_non_array_candidates_reseeded() {
        let mut persistence = store_with(StoreKey::CandidateList, r#"{"names": ["A"]}"#);
        assert_eq!(persistence.load_candidates().names(), DEFAULT_NAMES);
        assert_eq!(persistence.raw(StoreKey::CandidateList), Some(seed_json()));
    }

    #[test]
    fn test_empty_candidates_reseeded() {
        let mut persistence = store_with(StoreKey::CandidateList, "[]");
        assert_eq!(persistence.load_candidates().names(), DEFAULT_NAMES);
        assert_eq!(persistence.raw(StoreKey::CandidateList), Some(seed_json()));
    }

    #[test]
    fn test_non_string_entries_skipped() {
        let mut persistence = store_with(StoreKey::CandidateList, r#"["Amy", 7, null, "Zed"]"#);
        assert_eq!(persistence.load_candidates().names(), ["Amy", "Zed"]);
    }

    #[test]
    fn test_stored_candidates_are_sanitised() {
        let mut persistence =
            store_with(StoreKey::CandidateList, r#"["  Zed ", "", "   ", "Amy"]"#);
        assert_eq!(persistence.load_candidates().names(), ["Zed", "Amy"]);
    }

    #[test]
    fn test_candidates_round_trip_preserves_order() {
        let mut persistence = Persistence::new(Box::new(MemoryStore::new()));
        let list = CandidateList::from_names(
            ["Zoe", "Adam", "Mia", "Adam"].iter().map(|s| s.to_string()),
        );
        persistence.save_candidates(&list);
        assert_eq!(persistence.load_candidates(), list);
    }

    #[test]
    fn test_exclusions_default_and_round_trip() {
        let mut persistence = Persistence::new(Box::new(MemoryStore::new()));
        assert!(persistence.load_exclusions().is_empty());

        let mut set = ExclusionSet::default();
        set.toggle("Bob");
        set.toggle("Grace");
        persistence.save_exclusions(&set);
        assert_eq!(persistence.load_exclusions(), set);
    }

    #[test]
    fn test_malformed_exclusions_fall_back() {
        let persistence = store_with(StoreKey::ExclusionSet, "nope");
        assert!(persistence.load_exclusions().is_empty());
    }

    #[test]
    fn test_header_default_and_round_trip() {
        let mut persistence = Persistence::new(Box::new(MemoryStore::new()));
        assert_eq!(persistence.load_header(), DEFAULT_HEADER);
        persistence.save_header("Friday standup");
        assert_eq!(persistence.load_header(), "Friday standup");
        persistence.save_header("");
        assert_eq!(persistence.load_header(), DEFAULT_HEADER);
    }

    #[test]
    fn test_broken_store_never_panics() {
        let mut persistence = Persistence::new(Box::new(BrokenStore));
        let list = persistence.load_candidates();
        assert_eq!(list.names(), DEFAULT_NAMES);
        persistence.save_candidates(&list);
        persistence.save_header("ignored");
        assert_eq!(persistence.load_header(), DEFAULT_HEADER);
        assert!(persistence.load_exclusions().is_empty());
    }
}
