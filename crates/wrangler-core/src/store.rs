use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

const DEFAULT_RECORD_TYPE: &str = "users";

/// The kind of record a username belongs to (e.g. `users`, `teams`).
///
/// Stores keep one namespace per record type, so the same username may be
/// taken for one type and free for another.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(String);

impl RecordType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordType {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_TYPE)
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A read-only view over the set of taken usernames.
///
/// Lookups must reflect the current state of the backing store; callers do
/// not tolerate stale answers.
#[async_trait]
pub trait UsernameStore: Send + Sync + 'static {
    /// Checks whether `username` is already taken for `record_type`.
    async fn exists(&self, record_type: &RecordType, username: &str) -> Result<bool>;
}

/// A store that can also reserve usernames.
///
/// Suggestions are checked without a reservation, so two callers may be
/// handed the same name. `claim` is the atomic check-and-insert a caller
/// performs when it actually persists the chosen username.
#[async_trait]
pub trait UsernameRegistry: UsernameStore {
    /// Marks `username` as taken. Returns `Err(Conflict)` if it already is.
    async fn claim(&self, record_type: &RecordType, username: &str) -> Result<()>;

    /// Frees `username` again.
    /// Returns `true` if it was taken and has been removed.
    async fn release(&self, record_type: &RecordType, username: &str) -> Result<bool>;
}

#[async_trait]
impl<T: UsernameStore> UsernameStore for Arc<T> {
    async fn exists(&self, record_type: &RecordType, username: &str) -> Result<bool> {
        (**self).exists(record_type, username).await
    }
}
