use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use wrangler_core::SuggestError;

/// Selects the collision resolution strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Driver {
    /// Appends `0`, `1`, `2`, ... until the username is free.
    #[default]
    Increment,
    /// Appends random non-negative integers until the username is free.
    Random,
}

impl Display for Driver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Driver::Increment => write!(f, "increment"),
            Driver::Random => write!(f, "random"),
        }
    }
}

impl FromStr for Driver {
    type Err = SuggestError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "increment" | "incrementing" => Ok(Driver::Increment),
            "random" | "randomized" => Ok(Driver::Random),
            _ => Err(SuggestError::UnknownDriver(name.to_string())),
        }
    }
}

impl TryFrom<String> for Driver {
    type Error = SuggestError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
