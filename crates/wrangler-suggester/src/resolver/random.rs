use crate::oracle::Oracle;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::num::NonZeroU64;
use tracing::{debug, warn};
use wrangler_core::{SuggestError, UsernameStore};

/// Largest suffix drawn, matching a 31-bit `rand()`.
pub const MAX_SUFFIX: u32 = i32::MAX as u32;

/// Resolves collisions by appending random non-negative integers.
///
/// Suffixes rejected during one `make_unique` call are remembered, so a
/// repeated draw costs an attempt but no store query.
#[derive(Debug)]
pub struct RandomResolver {
    max_attempts: NonZeroU64,
    rng: Mutex<StdRng>,
}

impl RandomResolver {
    /// Creates a resolver seeded from the operating system.
    pub fn new(max_attempts: NonZeroU64) -> Self {
        Self {
            max_attempts,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a resolver with a fixed seed, for reproducible runs.
    pub fn with_seed(max_attempts: NonZeroU64, seed: u64) -> Self {
        Self {
            max_attempts,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn max_attempts(&self) -> NonZeroU64 {
        self.max_attempts
    }

    // The guard is released before returning so it never lives across an await.
    fn draw(&self) -> u32 {
        self.rng.lock().random_range(0..=MAX_SUFFIX)
    }

    pub async fn make_unique<S: UsernameStore + ?Sized>(
        &self,
        candidate: &str,
        oracle: &Oracle<'_, S>,
    ) -> Result<String, SuggestError> {
        let mut rejected = HashSet::new();

        for attempt in 1..=self.max_attempts.get() {
            let suffix = self.draw();
            if rejected.contains(&suffix) {
                continue;
            }

            let username = format!("{candidate}{suffix}");
            if oracle.is_unique(&username).await? {
                debug!(candidate, username = %username, attempts = attempt, "resolved collision");
                return Ok(username);
            }
            rejected.insert(suffix);
        }

        warn!(candidate, attempts = self.max_attempts.get(), "random suffix search exhausted");
        Err(SuggestError::Exhausted {
            candidate: candidate.to_owned(),
            attempts: self.max_attempts.get(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::SuggestionBatch;
    use async_trait::async_trait;
    use std::num::NonZeroUsize;
    use wrangler_core::error::Result;
    use wrangler_core::RecordType;
    use wrangler_storage::InMemoryStore;

    struct EverythingTaken;

    #[async_trait]
    impl UsernameStore for EverythingTaken {
        async fn exists(&self, _record_type: &RecordType, _username: &str) -> Result<bool> {
            Ok(true)
        }
    }

    fn attempts(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    fn suffix_of<'a>(username: &'a str, candidate: &str) -> &'a str {
        username.strip_prefix(candidate).unwrap()
    }

    #[tokio::test]
    async fn appends_numeric_suffix_in_range() {
        let users = RecordType::default();
        let store = InMemoryStore::new();
        let batch = SuggestionBatch::new(NonZeroUsize::MIN);
        let oracle = Oracle::new(&store, &users, &batch);
        let resolver = RandomResolver::new(attempts(10));

        let username = resolver.make_unique("alice", &oracle).await.unwrap();
        let suffix: u32 = suffix_of(&username, "alice").parse().unwrap();

        assert!(suffix <= MAX_SUFFIX);
    }

    #[tokio::test]
    async fn same_seed_gives_same_result() {
        let users = RecordType::default();
        let store = InMemoryStore::new();
        let batch = SuggestionBatch::new(NonZeroUsize::MIN);
        let oracle = Oracle::new(&store, &users, &batch);

        let first = RandomResolver::with_seed(attempts(10), 42)
            .make_unique("alice", &oracle)
            .await
            .unwrap();
        let second = RandomResolver::with_seed(attempts(10), 42)
            .make_unique("alice", &oracle)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn redraws_after_collision() {
        let users = RecordType::default();
        let batch = SuggestionBatch::new(NonZeroUsize::MIN);

        // Find out what the seeded resolver draws first, then take it.
        let probe_store = InMemoryStore::new();
        let first = RandomResolver::with_seed(attempts(10), 7)
            .make_unique("alice", &Oracle::new(&probe_store, &users, &batch))
            .await
            .unwrap();

        let store = InMemoryStore::with_taken(&users, [first.clone()]);
        let second = RandomResolver::with_seed(attempts(10), 7)
            .make_unique("alice", &Oracle::new(&store, &users, &batch))
            .await
            .unwrap();

        assert_ne!(first, second);
        assert!(second.starts_with("alice"));
    }

    #[tokio::test]
    async fn exhausted_after_max_attempts() {
        let users = RecordType::default();
        let batch = SuggestionBatch::new(NonZeroUsize::MIN);
        let oracle = Oracle::new(&EverythingTaken, &users, &batch);

        let err = RandomResolver::new(attempts(5))
            .make_unique("alice", &oracle)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SuggestError::Exhausted {
                candidate: "alice".to_string(),
                attempts: 5,
            }
        );
    }
}
