use crate::chess::Square;
use derive_more::{DebugCustom, Display, Error};
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The distance travelled in files.
    #[inline(always)]
    pub fn files(&self) -> i8 {
        self.whither().file() - self.whence().file()
    }

    /// The distance travelled in ranks.
    #[inline(always)]
    pub fn ranks(&self) -> i8 {
        self.whither().rank() - self.whence().rank()
    }
}

/// The reason why the string is not valid move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "failed to parse move, expected a pair of squares such as `e2e4`")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        let whence = s[..i].parse().map_err(|_| ParseMoveError)?;
        let whither = s[i..].parse().map_err(|_| ParseMoveError)?;
        Ok(Move(whence, whither))
    }
}
