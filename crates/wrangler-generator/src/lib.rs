pub mod config;
pub mod dictionary;
pub mod username;

pub use config::{Case, GeneratorConfig, SeedSource};
pub use dictionary::Dictionary;
pub use username::UsernameGenerator;

use wrangler_core::GeneratorError;

/// Trait for producing candidate usernames.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness is the suggestion engine's concern. They are called once per
/// candidate, so they should be cheap.
pub trait Generator: Send + Sync + 'static {
    /// Produces one candidate username from an optional seed.
    ///
    /// A missing seed lets the implementation fall back to its own
    /// composition (e.g. random dictionary words).
    fn generate(&self, seed: Option<&str>) -> Result<String, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UsernameGenerator>();
    }

    #[test]
    fn usable_as_trait_object() {
        let generator: Box<dyn Generator> = Box::new(UsernameGenerator::default());
        assert_eq!(generator.generate(Some("Linus")).unwrap(), "linus");
    }
}
