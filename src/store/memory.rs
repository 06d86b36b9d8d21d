//! In-memory store, nothing survives the process.

use std::collections::HashMap;

use super::{KeyValueStore, StoreError, StoreKey};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(&key).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.values.insert(key, value.to_string());
        Ok(())
    }
}
