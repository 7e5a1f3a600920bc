use crate::chess::{Color, Role};
use crate::util::Integer;
use std::fmt::{self, Formatter, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Pieces are plain values: two pieces of the same kind and color are indistinguishable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.1
    }

    /// An iterator over all twelve pieces.
    pub fn iter() -> impl Iterator<Item = Piece> {
        Role::iter().flat_map(|r| Color::iter().map(move |c| Piece(c, r)))
    }
}

/// Prints the piece letter, upper case for white and lower case for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.color() {
            Color::White => f.write_char(self.role().letter().to_ascii_uppercase()),
            Color::Black => f.write_char(self.role().letter()),
        }
    }
}
