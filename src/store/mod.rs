//! Persistent key-value storage for wheel state.
//!
//! This module encapsulates everything that touches durable storage:
//! - `sqlite`: the on-disk backend used by normal runs
//! - `memory`: a map-backed store for `--ephemeral` runs and tests
//! - `persistence`: typed, best-effort accessors used by the app

mod memory;
mod persistence;
mod sqlite;

pub use memory::MemoryStore;
#[cfg(test)]
pub use persistence::{DEFAULT_HEADER, DEFAULT_NAMES};
pub use persistence::Persistence;
pub use sqlite::SqliteStore;

use thiserror::Error;

/// Logical keys under which wheel state is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    CandidateList,
    ExclusionSet,
    HeaderText,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::CandidateList => "candidate-list",
            StoreKey::ExclusionSet => "exclusion-set",
            StoreKey::HeaderText => "header-text",
        }
    }
}

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// String-keyed storage with synchronous reads and writes
pub trait KeyValueStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;
}
