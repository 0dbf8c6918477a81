pub mod increment;
pub mod random;

pub use increment::IncrementResolver;
pub use random::RandomResolver;

use crate::driver::Driver;
use crate::oracle::Oracle;
use std::num::NonZeroU64;
use wrangler_core::{SuggestError, UsernameStore};

/// A collision resolution strategy.
///
/// Given a candidate the oracle rejected, `make_unique` derives a variant
/// the oracle accepts, or gives up with [`SuggestError::Exhausted`] after
/// `max_attempts` tries.
#[derive(Debug)]
pub enum Resolver {
    Increment(IncrementResolver),
    Random(RandomResolver),
}

impl Resolver {
    pub fn for_driver(driver: Driver, max_attempts: NonZeroU64) -> Self {
        match driver {
            Driver::Increment => Resolver::Increment(IncrementResolver::new(max_attempts)),
            Driver::Random => Resolver::Random(RandomResolver::new(max_attempts)),
        }
    }

    pub fn driver(&self) -> Driver {
        match self {
            Resolver::Increment(_) => Driver::Increment,
            Resolver::Random(_) => Driver::Random,
        }
    }

    pub async fn make_unique<S: UsernameStore + ?Sized>(
        &self,
        candidate: &str,
        oracle: &Oracle<'_, S>,
    ) -> Result<String, SuggestError> {
        match self {
            Resolver::Increment(resolver) => resolver.make_unique(candidate, oracle).await,
            Resolver::Random(resolver) => resolver.make_unique(candidate, oracle).await,
        }
    }
}

impl From<IncrementResolver> for Resolver {
    fn from(resolver: IncrementResolver) -> Self {
        Resolver::Increment(resolver)
    }
}

impl From<RandomResolver> for Resolver {
    fn from(resolver: RandomResolver) -> Self {
        Resolver::Random(resolver)
    }
}
