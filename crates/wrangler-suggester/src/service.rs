use crate::batch::SuggestionBatch;
use crate::config::{WranglerConfig, DEFAULT_MAX_ATTEMPTS};
use crate::driver::Driver;
use crate::engine::{EngineSettings, SuggestionEngine};
use crate::resolver::Resolver;
use async_trait::async_trait;
use std::num::{NonZeroU64, NonZeroUsize};
use std::sync::Arc;
use tracing::debug;
use wrangler_core::{GeneratorError, RecordType, SuggestError, Suggester, UsernameStore};
use wrangler_generator::{Generator, GeneratorConfig, UsernameGenerator};

type Result<T> = std::result::Result<T, SuggestError>;

/// A concrete implementation of the `Suggester` trait.
///
/// This service wraps a `UsernameStore` and a `Generator` and holds the
/// settings of the next run:
/// - the collision resolution driver
/// - the batch size
/// - the attempt limit per collision
///
/// Setters validate eagerly, so a bad value never reaches a run. Each
/// `suggest` call builds a fresh engine and batch; nothing carries over
/// between calls.
#[derive(Debug)]
pub struct SuggesterService<S, G = UsernameGenerator> {
    store: Arc<S>,
    generator: Arc<G>,
    driver: Driver,
    settings: EngineSettings,
    max_attempts: NonZeroU64,
}

impl<S> SuggesterService<S, UsernameGenerator>
where
    S: UsernameStore,
{
    /// Creates a service with the default generator and settings.
    pub fn new(store: S) -> Self {
        Self::with_generator(store, UsernameGenerator::default())
    }

    /// Creates a service from a validated [`WranglerConfig`].
    pub fn from_config(store: S, config: &WranglerConfig) -> Result<Self> {
        let generator = UsernameGenerator::new(config.generator.clone())?;
        let mut service = Self::with_generator(store, generator);
        service
            .set_amount(config.amount)?
            .set_max_attempts(config.max_attempts)?
            .set_record_type(config.record_type.clone());
        service.driver = config.driver;
        Ok(service)
    }
}

impl<S, G> SuggesterService<S, G>
where
    S: UsernameStore,
    G: Generator,
{
    /// Creates a service with a custom generator.
    pub fn with_generator(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            driver: Driver::default(),
            settings: EngineSettings::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Selects the collision resolution driver by name.
    pub fn set_driver(&mut self, name: &str) -> Result<&mut Self> {
        self.driver = name.parse()?;
        Ok(self)
    }

    /// Sets the number of suggestions per call. Must be at least 1.
    pub fn set_amount(&mut self, amount: usize) -> Result<&mut Self> {
        self.settings.amount = NonZeroUsize::new(amount).ok_or_else(|| {
            SuggestError::InvalidArgument(format!("amount must be at least 1, got {amount}"))
        })?;
        Ok(self)
    }

    /// Sets how many suffixes a resolver tries per collision. Must be at least 1.
    pub fn set_max_attempts(&mut self, max_attempts: u64) -> Result<&mut Self> {
        self.max_attempts = NonZeroU64::new(max_attempts).ok_or_else(|| {
            SuggestError::InvalidArgument(format!(
                "max_attempts must be at least 1, got {max_attempts}"
            ))
        })?;
        Ok(self)
    }

    pub fn set_record_type(&mut self, record_type: impl Into<RecordType>) -> &mut Self {
        self.settings.record_type = record_type.into();
        self
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }

    pub fn amount(&self) -> NonZeroUsize {
        self.settings.amount
    }

    pub fn max_attempts(&self) -> NonZeroU64 {
        self.max_attempts
    }

    pub fn record_type(&self) -> &RecordType {
        &self.settings.record_type
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn engine(&self) -> SuggestionEngine<'_, S, G> {
        let resolver = Resolver::for_driver(self.driver, self.max_attempts);
        SuggestionEngine::new(&*self.store, &*self.generator, resolver, &self.settings)
    }
}

impl<S, G> SuggesterService<S, G>
where
    S: UsernameStore,
    G: Generator + TryFrom<GeneratorConfig, Error = GeneratorError>,
{
    /// Rebuilds the generator from `config`.
    ///
    /// Only the generator's own validation applies.
    pub fn set_generator_config(&mut self, config: GeneratorConfig) -> Result<&mut Self> {
        self.generator = Arc::new(G::try_from(config)?);
        Ok(self)
    }
}

impl<S, G> Clone for SuggesterService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
            driver: self.driver,
            settings: self.settings.clone(),
            max_attempts: self.max_attempts,
        }
    }
}

#[async_trait]
impl<S, G> Suggester for SuggesterService<S, G>
where
    S: UsernameStore,
    G: Generator,
{
    async fn suggest(&self, seed: Option<&str>) -> Result<Vec<String>> {
        let batch = self.engine().generate_suggestions(seed).await?;
        debug!(seed = ?seed, driver = %self.driver, count = batch.len(), "suggested usernames");
        Ok(batch.into_vec())
    }
}

impl<S, G> SuggesterService<S, G>
where
    S: UsernameStore,
    G: Generator,
{
    /// Like [`Suggester::suggest`], but keeps the batch type.
    pub async fn suggest_batch(&self, seed: Option<&str>) -> Result<SuggestionBatch> {
        self.engine().generate_suggestions(seed).await
    }
}
