use crate::batch::SuggestionBatch;
use crate::config::DEFAULT_AMOUNT;
use crate::oracle::Oracle;
use crate::resolver::Resolver;
use std::num::NonZeroUsize;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;
use wrangler_core::{RecordType, SuggestError, UsernameStore};
use wrangler_generator::Generator;

/// Per-call settings of a [`SuggestionEngine`].
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct EngineSettings {
    /// Number of suggestions in a complete batch.
    #[builder(default = DEFAULT_AMOUNT)]
    pub amount: NonZeroUsize,
    /// Record type the store is queried for.
    #[builder(default, setter(into))]
    pub record_type: RecordType,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Drives one suggestion run: generate a candidate, check it, resolve
/// collisions, and append it, until the batch is full.
///
/// The engine only reads from the store. Every suggestion was free when it
/// was accepted, but nothing is reserved.
pub struct SuggestionEngine<'a, S: ?Sized, G: ?Sized> {
    store: &'a S,
    generator: &'a G,
    resolver: Resolver,
    settings: &'a EngineSettings,
}

impl<'a, S, G> SuggestionEngine<'a, S, G>
where
    S: UsernameStore + ?Sized,
    G: Generator + ?Sized,
{
    pub fn new(
        store: &'a S,
        generator: &'a G,
        resolver: Resolver,
        settings: &'a EngineSettings,
    ) -> Self {
        Self {
            store,
            generator,
            resolver,
            settings,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Builds a batch of exactly `amount` pairwise distinct usernames.
    ///
    /// Generator and store errors are returned unchanged. A candidate
    /// whose suffix search runs out of attempts fails the whole call with
    /// [`SuggestError::Exhausted`].
    pub async fn generate_suggestions(
        &self,
        seed: Option<&str>,
    ) -> Result<SuggestionBatch, SuggestError> {
        debug!(
            amount = self.settings.amount.get(),
            driver = %self.resolver.driver(),
            record_type = %self.settings.record_type,
            "generating suggestions"
        );

        let mut batch = SuggestionBatch::new(self.settings.amount);

        while !batch.is_full() {
            let candidate = self.generator.generate(seed)?;
            trace!(candidate = %candidate, "generated candidate");

            let suggestion = {
                let oracle = Oracle::new(self.store, &self.settings.record_type, &batch);
                if oracle.is_unique(&candidate).await? {
                    candidate
                } else {
                    self.resolver.make_unique(&candidate, &oracle).await?
                }
            };

            let accepted = batch.push(suggestion);
            debug_assert!(accepted, "oracle accepted a username the batch rejects");
        }

        debug!(suggestions = ?batch.as_slice(), "suggestions complete");
        Ok(batch)
    }
}
