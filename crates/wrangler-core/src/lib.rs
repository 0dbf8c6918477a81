//! Core types and traits for the username wrangler.
//!
//! This crate provides the error taxonomy and the collaborator contracts
//! shared by the generator, the stores and the suggestion engine.

pub mod error;
pub mod store;
pub mod suggester;

pub use error::{GeneratorError, StorageError, SuggestError};
pub use store::{RecordType, UsernameRegistry, UsernameStore};
pub use suggester::Suggester;
