use crate::driver::Driver;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU64, NonZeroUsize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use wrangler_core::RecordType;
use wrangler_generator::GeneratorConfig;

pub const DEFAULT_AMOUNT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(amount) => amount,
    None => NonZeroUsize::MIN,
};

pub const DEFAULT_MAX_ATTEMPTS: NonZeroU64 = match NonZeroU64::new(10_000) {
    Some(attempts) => attempts,
    None => NonZeroU64::MIN,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Static configuration of a suggester, built once and passed by reference.
///
/// Missing keys take their defaults, and empty dictionary lists fall back
/// to the built-in words when the generator is built. Range checks
/// (`amount >= 1`, `max_attempts >= 1`) happen when the config is applied
/// to a [`SuggesterService`](crate::SuggesterService).
///
/// ```toml
/// amount = 5
/// driver = "random"
/// record_type = "users"
/// max_attempts = 1000
///
/// [generator]
/// separator = "_"
/// case = "lower"
/// source = "email"
///
/// [generator.dictionary]
/// adjectives = ["brave", "calm"]
/// nouns = ["otter", "heron"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WranglerConfig {
    pub amount: usize,
    pub driver: Driver,
    pub max_attempts: u64,
    pub record_type: RecordType,
    pub generator: GeneratorConfig,
}

impl Default for WranglerConfig {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT.get(),
            driver: Driver::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS.get(),
            record_type: RecordType::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl WranglerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), driver = %config.driver, amount = config.amount, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrangler_generator::{Case, Dictionary, SeedSource};

    #[test]
    fn empty_document_gives_defaults() {
        let config = WranglerConfig::from_toml_str("").unwrap();
        assert_eq!(config, WranglerConfig::default());
        assert_eq!(config.amount, 3);
        assert_eq!(config.driver, Driver::Increment);
        assert_eq!(config.max_attempts, 10_000);
        assert_eq!(config.record_type.as_str(), "users");
    }

    #[test]
    fn full_document() {
        let config = WranglerConfig::from_toml_str(
            r#"
            amount = 5
            driver = "Random"
            max_attempts = 250
            record_type = "teams"

            [generator]
            separator = "_"
            case = "title"
            source = "email"
            min_length = 4
            max_length = 20

            [generator.dictionary]
            adjectives = ["brave"]
            nouns = ["otter"]
            "#,
        )
        .unwrap();

        assert_eq!(config.amount, 5);
        assert_eq!(config.driver, Driver::Random);
        assert_eq!(config.max_attempts, 250);
        assert_eq!(config.record_type, RecordType::new("teams"));
        assert_eq!(config.generator.separator, "_");
        assert_eq!(config.generator.case, Case::Title);
        assert_eq!(config.generator.source, SeedSource::Email);
        assert_eq!(config.generator.min_length, 4);
        assert_eq!(config.generator.max_length, 20);
        assert_eq!(
            config.generator.dictionary,
            Dictionary::new(vec!["brave".to_string()], vec!["otter".to_string()])
        );
    }

    #[test]
    fn partial_dictionary_keeps_builtin_words() {
        let config = WranglerConfig::from_toml_str(
            r#"
            [generator.dictionary]
            nouns = ["otter"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.generator.dictionary.adjectives,
            Dictionary::default().adjectives
        );
        assert_eq!(config.generator.dictionary.nouns, vec!["otter".to_string()]);
    }

    #[test]
    fn unknown_driver_is_a_parse_error() {
        let err = WranglerConfig::from_toml_str(r#"driver = "nonexistent""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unknown driver"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = WranglerConfig::load("/nonexistent/wrangler.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("wrangler-config-{}.toml", std::process::id()));
        std::fs::write(&path, "amount = 7\n").unwrap();

        let config = WranglerConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.amount, 7);
    }
}
