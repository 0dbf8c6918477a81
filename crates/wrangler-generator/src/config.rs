use crate::dictionary::Dictionary;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Letter case applied to every word of a generated username.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Lower,
    Upper,
    /// First letter of each word upper case, the rest lower case.
    Title,
    /// Keep the seed's own casing.
    Mixed,
}

/// How a seed string is interpreted before it is normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    /// The seed is a display name such as "Ada Lovelace".
    #[default]
    Name,
    /// The seed is an email address; everything from the `@` on is dropped.
    Email,
}

/// Configures a [`UsernameGenerator`](crate::UsernameGenerator).
///
/// Every field has a default, so partial TOML tables deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Placed between the words of a username.
    #[builder(default, setter(into))]
    pub separator: String,
    #[builder(default)]
    pub case: Case,
    #[builder(default)]
    pub source: SeedSource,
    /// Words used when the seed is missing or has nothing usable in it.
    #[builder(default)]
    pub dictionary: Dictionary,
    /// Shorter usernames are padded with random digits. `0` disables padding.
    #[builder(default)]
    pub min_length: usize,
    /// Longer usernames are truncated. `0` means unlimited.
    #[builder(default)]
    pub max_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();

        assert_eq!(config.separator, "");
        assert_eq!(config.case, Case::Lower);
        assert_eq!(config.source, SeedSource::Name);
        assert_eq!(config.dictionary, Dictionary::default());
        assert_eq!(config.min_length, 0);
        assert_eq!(config.max_length, 0);
    }

    #[test]
    fn builder_overrides() {
        let config = GeneratorConfig::builder()
            .separator("_")
            .case(Case::Title)
            .source(SeedSource::Email)
            .max_length(12)
            .build();

        assert_eq!(config.separator, "_");
        assert_eq!(config.case, Case::Title);
        assert_eq!(config.source, SeedSource::Email);
        assert_eq!(config.max_length, 12);
    }
}
