//! Username suggestion engine.
//!
//! This crate provides the [`SuggesterService`] facade, the suggestion
//! engine it drives, and the two collision resolution strategies. Core
//! types are re-exported from `wrangler_core`.
//!
//! # Example
//!
//! ```rust
//! use wrangler_core::{RecordType, Suggester};
//! use wrangler_storage::InMemoryStore;
//! use wrangler_suggester::SuggesterService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let users = RecordType::default();
//! let store = InMemoryStore::with_taken(&users, ["alice"]);
//!
//! let mut suggester = SuggesterService::new(store);
//! suggester.set_driver("increment")?.set_amount(3)?;
//!
//! let suggestions = suggester.suggest(Some("Alice")).await?;
//! assert_eq!(suggestions, vec!["alice0", "alice1", "alice2"]);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod driver;
pub mod engine;
pub mod oracle;
pub mod resolver;
pub mod service;

pub use batch::SuggestionBatch;
pub use config::{ConfigError, WranglerConfig};
pub use driver::Driver;
pub use engine::{EngineSettings, SuggestionEngine};
pub use oracle::Oracle;
pub use resolver::{IncrementResolver, RandomResolver, Resolver};
pub use service::SuggesterService;
pub use wrangler_core::{RecordType, SuggestError, Suggester};
