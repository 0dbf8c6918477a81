use crate::oracle::Oracle;
use std::num::NonZeroU64;
use tracing::{debug, warn};
use wrangler_core::{SuggestError, UsernameStore};

/// Resolves collisions by appending `0`, `1`, `2`, ... (no padding).
///
/// For a fixed store state the result is deterministic.
#[derive(Debug, Clone)]
pub struct IncrementResolver {
    max_attempts: NonZeroU64,
}

impl IncrementResolver {
    pub fn new(max_attempts: NonZeroU64) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> NonZeroU64 {
        self.max_attempts
    }

    /// Returns the first free `candidate{n}`, trying at most
    /// `max_attempts` suffixes.
    pub async fn make_unique<S: UsernameStore + ?Sized>(
        &self,
        candidate: &str,
        oracle: &Oracle<'_, S>,
    ) -> Result<String, SuggestError> {
        for suffix in 0..self.max_attempts.get() {
            let username = format!("{candidate}{suffix}");
            if oracle.is_unique(&username).await? {
                debug!(candidate, username = %username, attempts = suffix + 1, "resolved collision");
                return Ok(username);
            }
        }

        warn!(candidate, attempts = self.max_attempts.get(), "suffix search exhausted");
        Err(SuggestError::Exhausted {
            candidate: candidate.to_owned(),
            attempts: self.max_attempts.get(),
        })
    }
}
