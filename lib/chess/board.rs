use crate::chess::{Bitboard, Color, File, Piece, Rank, Role, Square};
use crate::util::Integer;
use std::fmt::{self, Write};
use std::ops::Index;

/// What lies at a pair of grid coordinates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Occupancy {
    /// The coordinates fall outside of the board.
    OffBoard,
    /// The square is empty.
    Empty,
    /// The square holds a piece.
    Occupied(Piece),
}

impl From<Option<Piece>> for Occupancy {
    #[inline(always)]
    fn from(p: Option<Piece>) -> Self {
        p.map_or(Occupancy::Empty, Occupancy::Occupied)
    }
}

/// The chess board.
///
/// Holds at most one [`Piece`] per [`Square`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    roles: [Bitboard; 6],
    colors: [Bitboard; 2],
}

/// The standard starting arrangement.
impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self {
            roles: [
                Bitboard::new(0x00FF00000000FF00),
                Bitboard::new(0x4200000000000042),
                Bitboard::new(0x2400000000000024),
                Bitboard::new(0x8100000000000081),
                Bitboard::new(0x0800000000000008),
                Bitboard::new(0x1000000000000010),
            ],
            colors: [
                Bitboard::new(0x000000000000FFFF),
                Bitboard::new(0xFFFF000000000000),
            ],
        }
    }
}

impl Board {
    /// A board without any pieces.
    #[inline(always)]
    pub fn empty() -> Self {
        Board {
            roles: [Bitboard::empty(); 6],
            colors: [Bitboard::empty(); 2],
        }
    }

    /// [`Square`]s occupied.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.by_color(Color::White) | self.by_color(Color::Black)
    }

    /// [`Square`]s occupied by a [`Color`].
    #[inline(always)]
    pub fn by_color(&self, c: Color) -> Bitboard {
        self.colors[c as usize]
    }

    /// [`Square`]s occupied by a [`Role`].
    #[inline(always)]
    pub fn by_role(&self, r: Role) -> Bitboard {
        self.roles[r as usize]
    }

    /// [`Square`]s occupied by a [`Piece`].
    #[inline(always)]
    pub fn by_piece(&self, p: Piece) -> Bitboard {
        self.by_color(p.color()) & self.by_role(p.role())
    }

    /// [`Square`] occupied by a the king of a [`Color`], if any.
    #[inline(always)]
    pub fn king(&self, side: Color) -> Option<Square> {
        self.by_piece(Piece(side, Role::King)).into_iter().next()
    }

    /// The [`Color`] of the piece on the given [`Square`], if any.
    #[inline(always)]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::iter().find(|&c| self.by_color(c).contains(sq))
    }

    /// The [`Role`] of the piece on the given [`Square`], if any.
    #[inline(always)]
    pub fn role_on(&self, sq: Square) -> Option<Role> {
        Role::iter().find(|&r| self.by_role(r).contains(sq))
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        Option::zip(self.color_on(sq), self.role_on(sq)).map(|(c, r)| Piece(c, r))
    }

    /// The number of pieces on the board.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.occupied().len()
    }

    /// Whether there are no pieces on the board.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Piece::iter().flat_map(|p| self.by_piece(p).into_iter().map(move |sq| (p, sq)))
    }

    /// Puts a piece on a square, or empties it, replacing whatever was there.
    #[inline(always)]
    pub fn set(&mut self, sq: Square, p: Option<Piece>) {
        for bb in self.roles.iter_mut().chain(self.colors.iter_mut()) {
            *bb = bb.without(sq);
        }

        if let Some(Piece(c, r)) = p {
            self.colors[c as usize] |= sq.bitboard();
            self.roles[r as usize] |= sq.bitboard();
        }
    }

    /// What lies at the given grid coordinates.
    ///
    /// See [`Square::from_coords`] for the coordinate system.
    #[inline(always)]
    pub fn probe(&self, row: i8, col: i8) -> Occupancy {
        match Square::from_coords(row, col) {
            None => Occupancy::OffBoard,
            Some(sq) => self.piece_on(sq).into(),
        }
    }

    /// Like [`Board::set`], but addressed by grid coordinates.
    ///
    /// Coordinates outside of the board are silently ignored.
    #[inline(always)]
    pub fn place(&mut self, row: i8, col: i8, p: Option<Piece>) {
        if let Some(sq) = Square::from_coords(row, col) {
            self.set(sq, p);
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        use {Color::*, Role::*};
        match self.piece_on(sq) {
            Some(Piece(White, Pawn)) => &Some(Piece(White, Pawn)),
            Some(Piece(White, Knight)) => &Some(Piece(White, Knight)),
            Some(Piece(White, Bishop)) => &Some(Piece(White, Bishop)),
            Some(Piece(White, Rook)) => &Some(Piece(White, Rook)),
            Some(Piece(White, Queen)) => &Some(Piece(White, Queen)),
            Some(Piece(White, King)) => &Some(Piece(White, King)),
            Some(Piece(Black, Pawn)) => &Some(Piece(Black, Pawn)),
            Some(Piece(Black, Knight)) => &Some(Piece(Black, Knight)),
            Some(Piece(Black, Bishop)) => &Some(Piece(Black, Bishop)),
            Some(Piece(Black, Rook)) => &Some(Piece(Black, Rook)),
            Some(Piece(Black, Queen)) => &Some(Piece(Black, Queen)),
            Some(Piece(Black, King)) => &Some(Piece(Black, King)),
            None => &None,
        }
    }
}

/// Renders the board as seen by white, eighth rank first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}")?;
            for file in File::iter() {
                f.write_char(' ')?;
                match self[Square::new(file, rank)] {
                    None => f.write_char('.')?,
                    Some(p) => write!(f, "{p}")?,
                }
            }

            f.write_char('\n')?;
        }

        f.write_char(' ')?;
        for file in File::iter() {
            write!(f, " {file}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<(Square, Piece)>(), 0..=32)
            .prop_map(|pieces| {
                let mut board = Board::empty();
                for (sq, p) in pieces {
                    board.set(sq, Some(p));
                }

                board
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn default_board_has_the_standard_starting_arrangement() {
        use {Color::*, Role::*};
        let board = Board::default();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (file, role) in File::iter().zip(back) {
            assert_eq!(board[Square::new(file, Rank::First)], Some(Piece(White, role)));
            assert_eq!(board[Square::new(file, Rank::Second)], Some(Piece(White, Pawn)));
            assert_eq!(board[Square::new(file, Rank::Seventh)], Some(Piece(Black, Pawn)));
            assert_eq!(board[Square::new(file, Rank::Eighth)], Some(Piece(Black, role)));
        }

        assert_eq!(board.len(), 32);
    }

    #[test]
    fn empty_board_has_no_pieces() {
        assert!(Board::empty().is_empty());
        assert_eq!(Board::empty().iter().count(), 0);
    }

    #[proptest]
    fn every_square_holds_at_most_one_piece(b: Board) {
        for sq in Square::iter() {
            assert!(Piece::iter().filter(|&p| b.by_piece(p).contains(sq)).count() <= 1);
        }
    }

    #[proptest]
    fn board_can_be_indexed_by_square(b: Board, sq: Square) {
        assert_eq!(b[sq], b.piece_on(sq));
        assert_eq!(b[sq].map(|p| p.color()), b.color_on(sq));
        assert_eq!(b[sq].map(|p| p.role()), b.role_on(sq));
    }

    #[proptest]
    fn set_replaces_the_contents_of_a_square(mut b: Board, sq: Square, p: Option<Piece>) {
        let before = b;
        b.set(sq, p);
        assert_eq!(b[sq], p);

        for s in Square::iter().filter(|&s| s != sq) {
            assert_eq!(b[s], before[s]);
        }
    }

    #[proptest]
    fn iter_returns_pieces_and_squares(b: Board) {
        for (p, sq) in b.iter() {
            assert_eq!(b[sq], Some(p));
        }

        assert_eq!(b.iter().count(), b.len());
    }

    #[proptest]
    fn king_returns_square_occupied_by_a_king(b: Board, c: Color) {
        if let Some(sq) = b.king(c) {
            assert_eq!(b[sq], Some(Piece(c, Role::King)));
        } else {
            assert!(b.by_piece(Piece(c, Role::King)).is_empty());
        }
    }

    #[proptest]
    fn probe_agrees_with_index_on_the_board(b: Board, sq: Square) {
        assert_eq!(b.probe(sq.row(), sq.col()), b[sq].into());
    }

    #[proptest]
    fn probe_off_the_board_is_distinct_from_empty(
        b: Board,
        #[strategy(-4i8..12)] i: i8,
        #[strategy(8i8..12)] j: i8,
    ) {
        assert_eq!(b.probe(i, j), Occupancy::OffBoard);
        assert_eq!(b.probe(j, i), Occupancy::OffBoard);
        assert_eq!(b.probe(-1 - i.abs(), i), Occupancy::OffBoard);
    }

    #[proptest]
    fn place_is_equivalent_to_set_on_the_board(mut b: Board, sq: Square, p: Option<Piece>) {
        let mut c = b;
        b.place(sq.row(), sq.col(), p);
        c.set(sq, p);
        assert_eq!(b, c);
    }

    #[proptest]
    fn place_off_the_board_is_ignored(
        mut b: Board,
        #[strategy(-4i8..12)] i: i8,
        #[strategy(8i8..12)] j: i8,
        p: Option<Piece>,
    ) {
        let before = b;
        b.place(i, j, p);
        b.place(j, i, p);
        assert_eq!(b, before);
    }

    #[test]
    fn board_is_printed_eighth_rank_first() {
        let expected = [
            "8 r n b q k b n r",
            "7 p p p p p p p p",
            "6 . . . . . . . .",
            "5 . . . . . . . .",
            "4 . . . . . . . .",
            "3 . . . . . . . .",
            "2 P P P P P P P P",
            "1 R N B Q K B N R",
            "  a b c d e f g h",
        ];

        assert_eq!(Board::default().to_string(), expected.join("\n"));
    }
}
