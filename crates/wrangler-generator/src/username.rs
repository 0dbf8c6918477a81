use crate::config::{Case, GeneratorConfig, SeedSource};
use crate::Generator;
use rand::Rng;
use wrangler_core::GeneratorError;

/// Derives usernames from names or email addresses, or composes them from
/// dictionary words when there is no usable seed.
///
/// The seed is split into words on every character that is not an ASCII
/// letter or digit; the words are cased and joined with the separator.
#[derive(Debug, Clone)]
pub struct UsernameGenerator {
    config: GeneratorConfig,
}

impl UsernameGenerator {
    /// Creates a generator, replacing empty dictionary lists with the
    /// built-in words.
    pub fn new(mut config: GeneratorConfig) -> Result<Self, GeneratorError> {
        if config.min_length > 0 && config.max_length > 0 && config.min_length > config.max_length
        {
            return Err(GeneratorError::InvalidConfig(format!(
                "min_length {} exceeds max_length {}",
                config.min_length, config.max_length
            )));
        }

        config.dictionary = config.dictionary.with_defaults_for_empty();
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn seed_words<'a>(&self, seed: &'a str) -> Vec<&'a str> {
        let seed = match self.config.source {
            SeedSource::Name => seed,
            SeedSource::Email => seed.split_once('@').map_or(seed, |(local, _)| local),
        };
        split_words(seed).collect()
    }

    fn dictionary_words<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&str> {
        let (adjective, noun) = self.config.dictionary.pick(rng);
        split_words(adjective).chain(split_words(noun)).collect()
    }

    fn join(&self, words: &[&str]) -> String {
        words
            .iter()
            .map(|word| apply_case(word, self.config.case))
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }

    fn fit_length<R: Rng + ?Sized>(&self, mut username: String, rng: &mut R) -> String {
        let max = self.config.max_length;
        if max > 0 && username.chars().count() > max {
            username = username.chars().take(max).collect();
            let separator = self.config.separator.as_str();
            if !separator.is_empty() {
                let trimmed = username.trim_end_matches(separator).len();
                username.truncate(trimmed);
            }
        }

        let mut length = username.chars().count();
        while length < self.config.min_length {
            let digit = rng.random_range(0..10u32);
            username.push(char::from_digit(digit, 10).unwrap_or('0'));
            length += 1;
        }

        username
    }
}

impl Default for UsernameGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }
}

impl TryFrom<GeneratorConfig> for UsernameGenerator {
    type Error = GeneratorError;

    fn try_from(config: GeneratorConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl Generator for UsernameGenerator {
    fn generate(&self, seed: Option<&str>) -> Result<String, GeneratorError> {
        let mut rng = rand::rng();

        let mut words = seed.map(|seed| self.seed_words(seed)).unwrap_or_default();
        if words.is_empty() {
            words = self.dictionary_words(&mut rng);
        }

        let username = self.fit_length(self.join(&words), &mut rng);
        if username.is_empty() {
            return Err(GeneratorError::EmptyUsername(seed.map(str::to_owned)));
        }

        Ok(username)
    }
}

fn split_words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
}

fn apply_case(word: &str, case: Case) -> String {
    match case {
        Case::Lower => word.to_ascii_lowercase(),
        Case::Upper => word.to_ascii_uppercase(),
        Case::Title => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        }
        Case::Mixed => word.to_string(),
    }
}
