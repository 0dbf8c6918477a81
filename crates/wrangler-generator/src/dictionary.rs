use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "bright", "calm", "clever", "cosmic", "crimson", "daring", "eager",
    "fancy", "fierce", "gentle", "golden", "happy", "hidden", "jolly", "keen", "lively", "lucky",
    "mellow", "misty", "nimble", "noble", "polar", "proud", "quick", "quiet", "rapid", "rustic",
    "silent", "silver", "sleepy", "snowy", "swift", "sunny", "tidy", "vivid", "wild", "witty",
];

const NOUNS: &[&str] = &[
    "badger", "bear", "beacon", "canyon", "cedar", "comet", "coyote", "crane", "dragon", "falcon",
    "fern", "fox", "glacier", "harbor", "hawk", "heron", "island", "lion", "lynx", "maple",
    "meadow", "moose", "otter", "owl", "panda", "pebble", "phoenix", "pine", "raven", "river",
    "rocket", "sparrow", "summit", "tiger", "tulip", "valley", "walrus", "willow", "wolf", "zebra",
];

/// Word lists used to compose a username when no usable seed is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionary {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
}

impl Dictionary {
    pub fn new(adjectives: Vec<String>, nouns: Vec<String>) -> Self {
        Self { adjectives, nouns }
    }

    /// Replaces every empty word list with the built-in one.
    pub fn with_defaults_for_empty(mut self) -> Self {
        if self.adjectives.is_empty() {
            self.adjectives = owned(ADJECTIVES);
        }
        if self.nouns.is_empty() {
            self.nouns = owned(NOUNS);
        }
        self
    }

    /// Picks an adjective and a noun at random.
    ///
    /// An empty list yields an empty word.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> (&str, &str) {
        let adjective = self.adjectives.choose(rng).map(String::as_str);
        let noun = self.nouns.choose(rng).map(String::as_str);
        (adjective.unwrap_or_default(), noun.unwrap_or_default())
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(owned(ADJECTIVES), owned(NOUNS))
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_dictionary_is_populated() {
        let dictionary = Dictionary::default();
        assert!(!dictionary.adjectives.is_empty());
        assert!(!dictionary.nouns.is_empty());
    }

    #[test]
    fn empty_lists_fall_back_to_builtin_words() {
        let dictionary =
            Dictionary::new(vec!["brave".to_string()], Vec::new()).with_defaults_for_empty();

        assert_eq!(dictionary.adjectives, vec!["brave".to_string()]);
        assert_eq!(dictionary.nouns, owned(NOUNS));
    }

    #[test]
    fn pick_draws_from_both_lists() {
        let dictionary = Dictionary::default();
        let mut rng = StdRng::seed_from_u64(7);

        let (adjective, noun) = dictionary.pick(&mut rng);

        assert!(ADJECTIVES.contains(&adjective));
        assert!(NOUNS.contains(&noun));
    }

    #[test]
    fn pick_from_empty_list_yields_empty_word() {
        let dictionary = Dictionary::new(Vec::new(), vec!["lion".to_string()]);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(dictionary.pick(&mut rng), ("", "lion"));
    }
}
