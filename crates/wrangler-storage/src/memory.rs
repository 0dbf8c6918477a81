use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;
use tracing::trace;
use wrangler_core::error::{Result, StorageError};
use wrangler_core::{RecordType, UsernameRegistry, UsernameStore};

/// In-memory implementation of the username store using DashMap.
///
/// Each record type owns its own set of taken usernames. DashMap shards its
/// locks, so lookups for different record types never block each other,
/// and `claim` holds the entry lock for its check-and-insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    storage: DashMap<RecordType, HashSet<String>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a store where `usernames` are already taken for `record_type`.
    pub fn with_taken<I, S>(record_type: &RecordType, usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        store.extend(record_type, usernames);
        store
    }

    /// Marks all `usernames` as taken, ignoring those that already are.
    pub fn extend<I, S>(&self, record_type: &RecordType, usernames: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.storage
            .entry(record_type.clone())
            .or_default()
            .extend(usernames.into_iter().map(Into::into));
    }

    /// Number of taken usernames for `record_type`.
    pub fn len(&self, record_type: &RecordType) -> usize {
        self.storage
            .get(record_type)
            .map_or(0, |usernames| usernames.len())
    }

    pub fn is_empty(&self, record_type: &RecordType) -> bool {
        self.len(record_type) == 0
    }
}

#[async_trait]
impl UsernameStore for InMemoryStore {
    async fn exists(&self, record_type: &RecordType, username: &str) -> Result<bool> {
        Ok(self
            .storage
            .get(record_type)
            .is_some_and(|usernames| usernames.contains(username)))
    }
}

#[async_trait]
impl UsernameRegistry for InMemoryStore {
    async fn claim(&self, record_type: &RecordType, username: &str) -> Result<()> {
        let mut usernames = self.storage.entry(record_type.clone()).or_default();
        if !usernames.insert(username.to_owned()) {
            return Err(StorageError::Conflict(username.to_owned()));
        }

        trace!(record_type = %record_type, username, "claimed username");
        Ok(())
    }

    async fn release(&self, record_type: &RecordType, username: &str) -> Result<bool> {
        let released = self
            .storage
            .get_mut(record_type)
            .is_some_and(|mut usernames| usernames.remove(username));

        if released {
            trace!(record_type = %record_type, username, "released username");
        }
        Ok(released)
    }
}
