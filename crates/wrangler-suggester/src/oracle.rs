use crate::batch::SuggestionBatch;
use tracing::trace;
use wrangler_core::error::Result;
use wrangler_core::{RecordType, UsernameStore};

/// Answers "is this username still free?" for one in-flight batch.
///
/// A username is unique when the store does not know it and the batch
/// being built does not already hold it.
pub struct Oracle<'a, S: ?Sized> {
    store: &'a S,
    record_type: &'a RecordType,
    batch: &'a SuggestionBatch,
}

impl<'a, S: UsernameStore + ?Sized> Oracle<'a, S> {
    pub fn new(store: &'a S, record_type: &'a RecordType, batch: &'a SuggestionBatch) -> Self {
        Self {
            store,
            record_type,
            batch,
        }
    }

    /// Store failures are returned as-is; nothing is retried here.
    pub async fn is_unique(&self, username: &str) -> Result<bool> {
        if self.batch.contains(username) {
            trace!(username, "already suggested in this batch");
            return Ok(false);
        }

        let taken = self.store.exists(self.record_type, username).await?;
        trace!(record_type = %self.record_type, username, taken, "checked store");
        Ok(!taken)
    }
}
