use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// What happens when a single explosion would destroy both kings.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum MutualDestruction {
    /// The capture is rejected as an illegal move.
    #[default]
    #[display(fmt = "forbid")]
    Forbid,

    /// The capture is played and the game ends in a draw.
    #[display(fmt = "draw")]
    Draw,
}

/// The reason why parsing [`Rules`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rules configuration")]
pub struct ParseRulesError(ron::de::SpannedError);

/// Configurable aspects of the rules.
///
/// Written in [RON], e.g. `(mutual_destruction: draw)`; missing fields take their default.
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub mutual_destruction: MutualDestruction,
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Rules {
    type Err = ParseRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
