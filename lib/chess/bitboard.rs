use crate::chess::{File, Rank, Square};
use crate::util::Integer;
use derive_more::*;
use std::fmt::{self, Write};

/// A set of squares on a chess board.
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Constructor,
    Deref,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let sq = Square::new(file, rank);
                f.write_char(if self.contains(sq) { '■' } else { '◻' })?;
                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl Bitboard {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// Fills out squares on a bitboard.
    ///
    /// Starting from a square, fills out the squares by stepping on the board in each direction.
    /// Movement in a direction stops when an occupied square is reached.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::fill(Square::E2, &[(-1, 2), (1, -1)], Square::C6.bitboard())),
    ///     vec![Square::F1, Square::E2, Square::D4, Square::C6]
    /// );
    /// ```
    pub fn fill(sq: Square, steps: &[(i8, i8)], occupied: Bitboard) -> Bitboard {
        let mut bitboard = sq.bitboard();
        for &(df, dr) in steps.iter().filter(|&&step| step != (0, 0)) {
            let mut sq = sq;
            while !occupied.contains(sq) {
                match sq.offset(df, dr) {
                    None => break,
                    Some(next) => {
                        bitboard = bitboard.with(next);
                        sq = next;
                    }
                }
            }
        }

        bitboard
    }

    /// Bitboard with squares in the open segment between two squares.
    ///
    /// The segment is empty unless both squares share a file, a rank, or a diagonal.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::segment(Square::B4, Square::E1)),
    ///     vec![Square::D2, Square::C3]
    /// );
    /// ```
    pub fn segment(whence: Square, whither: Square) -> Self {
        let df = whither.file() - whence.file();
        let dr = whither.rank() - whence.rank();
        if df == 0 || dr == 0 || df.abs() == dr.abs() {
            let steps = [(df.signum(), dr.signum())];
            let bb = Bitboard::fill(whence, &steps, whither.bitboard());
            bb.without(whence).without(whither)
        } else {
            Bitboard::empty()
        }
    }

    /// Bitboard with the squares adjacent to a square, not including the square itself.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::adjacent(Square::A1)),
    ///     vec![Square::B1, Square::A2, Square::B2]
    /// );
    /// ```
    pub fn adjacent(sq: Square) -> Self {
        #[rustfmt::skip]
        const STEPS: [(i8, i8); 8] = [
            (-1, 1), (0, 1), (1, 1),
            (-1, 0),         (1, 0),
            (-1, -1), (0, -1), (1, -1),
        ];

        STEPS
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .fold(Bitboard::empty(), |bb, sq| bb.with(sq))
    }

    /// The number of [`Square`]s in the set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the board is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this [`Square`] is in the set.
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        !sq.bitboard().intersection(*self).is_empty()
    }

    /// Adds a [`Square`] to this bitboard.
    #[inline(always)]
    pub fn with(&self, sq: Square) -> Self {
        sq.bitboard().union(*self)
    }

    /// Removes a [`Square`]s from this bitboard.
    #[inline(always)]
    pub fn without(&self, sq: Square) -> Self {
        sq.bitboard().inverse().intersection(*self)
    }

    /// The set of [`Square`]s not in this bitboard.
    #[inline(always)]
    pub const fn inverse(&self) -> Self {
        Bitboard(!self.0)
    }

    /// The set of [`Square`]s in both bitboards.
    #[inline(always)]
    pub const fn intersection(&self, bb: Bitboard) -> Self {
        Bitboard(self.0 & bb.0)
    }

    /// The set of [`Square`]s in either bitboard.
    #[inline(always)]
    pub const fn union(&self, bb: Bitboard) -> Self {
        Bitboard(self.0 | bb.0)
    }

    /// An iterator over the [`Square`]s in this bitboard.
    #[inline(always)]
    pub fn iter(&self) -> Squares {
        Squares::new(*self)
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), |bb, sq| bb.with(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Squares::new(self)
    }
}

/// An iterator over the [`Square`]s in a [`Bitboard`].
#[derive(Debug, Constructor)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = <Square as Integer>::new(self.0.trailing_zeros() as i8);
            self.0 ^= sq.bitboard();
            Some(sq)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Squares {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }
}
