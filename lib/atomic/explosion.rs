use crate::chess::{Board, Move, Occupancy, Piece, Role, Square};
use arrayvec::ArrayVec;
use derive_more::Deref;
use std::fmt;

/// Pieces removed from the [`Board`] by an explosion, in order of removal.
///
/// The capturing piece comes first, followed by the captured piece and then any pieces caught
/// in the blast.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref)]
pub struct Casualties(ArrayVec<(Piece, Square), 10>);

impl fmt::Display for Casualties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, sq)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{p}{sq}")?;
        }

        Ok(())
    }
}

#[rustfmt::skip]
const BLAST: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Resolves a capture on a [`Board`].
///
/// The capturing piece is consumed along with the piece it captured, and every piece other than
/// a pawn on the squares surrounding the destination is destroyed, regardless of its color.
///
/// The move is assumed to have been validated as a capture.
pub fn detonate(board: &mut Board, m: Move) -> Casualties {
    let mut casualties = Casualties::default();

    for sq in [m.whence(), m.whither()] {
        if let Some(p) = board[sq] {
            casualties.0.push((p, sq));
            board.set(sq, None);
        }
    }

    let (row, col) = (m.whither().row(), m.whither().col());
    for (dr, dc) in BLAST {
        let (r, c) = (row + dr, col + dc);
        if let Occupancy::Occupied(p) = board.probe(r, c) {
            if p.role() != Role::Pawn {
                board.place(r, c, None);
                casualties.0.extend(Square::from_coords(r, c).map(|sq| (p, sq)));
            }
        }
    }

    casualties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Bitboard, Color};
    use crate::util::Integer;
    use test_strategy::proptest;
    use Color::*;
    use Role::*;
    use Square::*;

    fn board(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, p) in pieces {
            board.set(sq, Some(p));
        }

        board
    }

    #[proptest]
    fn explosion_clears_source_destination_and_non_pawn_neighbours(
        b: Board,
        #[filter(#m.whence() != #m.whither())] m: Move,
        attacker: Piece,
        target: Piece,
    ) {
        let mut b = b;
        b.set(m.whence(), Some(attacker));
        b.set(m.whither(), Some(target));
        let before = b;

        let casualties = detonate(&mut b, m);

        assert_eq!(b[m.whence()], None);
        assert_eq!(b[m.whither()], None);

        let blast = Bitboard::adjacent(m.whither());
        for sq in Square::iter().filter(|&sq| sq != m.whence() && sq != m.whither()) {
            match before[sq] {
                Some(p) if blast.contains(sq) && p.role() != Pawn => assert_eq!(b[sq], None),
                p => assert_eq!(b[sq], p),
            }
        }

        assert_eq!(casualties.len(), before.len() - b.len());
        assert_eq!(casualties[0], (attacker, m.whence()));
        assert_eq!(casualties[1], (target, m.whither()));
    }

    #[proptest]
    fn casualties_are_no_longer_on_the_board(
        b: Board,
        #[filter(#m.whence() != #m.whither())] m: Move,
    ) {
        let mut b = b;
        let before = b;
        for (p, sq) in detonate(&mut b, m).iter() {
            assert_eq!(before[*sq], Some(*p));
            assert_eq!(b[*sq], None);
        }
    }

    #[test]
    fn back_rank_rook_capture_destroys_both_rooks_and_the_neighbouring_knight() {
        let mut b = board(&[
            (A1, Piece(White, Rook)),
            (A8, Piece(Black, Rook)),
            (B8, Piece(Black, Knight)),
            (A7, Piece(Black, Pawn)),
            (E8, Piece(Black, King)),
            (E1, Piece(White, King)),
        ]);

        let casualties = detonate(&mut b, Move(A1, A8));

        assert_eq!(
            casualties.as_slice(),
            &[
                (Piece(White, Rook), A1),
                (Piece(Black, Rook), A8),
                (Piece(Black, Knight), B8),
            ]
        );

        assert_eq!(b[A1], None);
        assert_eq!(b[A8], None);
        assert_eq!(b[B8], None);
        assert_eq!(b[A7], Some(Piece(Black, Pawn)));
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn pawns_in_the_blast_ring_survive() {
        let mut b = board(&[
            (E4, Piece(White, Pawn)),
            (D5, Piece(Black, Knight)),
            (C6, Piece(Black, Pawn)),
            (E6, Piece(Black, Bishop)),
            (D4, Piece(White, Pawn)),
            (C4, Piece(White, Queen)),
        ]);

        detonate(&mut b, Move(E4, D5));

        assert_eq!(b[E4], None);
        assert_eq!(b[D5], None);
        assert_eq!(b[C6], Some(Piece(Black, Pawn)));
        assert_eq!(b[E6], None);
        assert_eq!(b[D4], Some(Piece(White, Pawn)));
        assert_eq!(b[C4], None);
    }

    #[test]
    fn a_captured_pawn_is_destroyed() {
        let mut b = board(&[(C3, Piece(White, Bishop)), (F6, Piece(Black, Pawn))]);
        let casualties = detonate(&mut b, Move(C3, F6));
        assert!(b.is_empty());
        assert_eq!(casualties.len(), 2);
    }

    #[test]
    fn explosions_are_clipped_at_the_edge_of_the_board() {
        let mut b = board(&[
            (B6, Piece(White, Knight)),
            (A8, Piece(Black, Queen)),
            (B8, Piece(Black, King)),
            (A7, Piece(Black, Rook)),
            (B7, Piece(Black, Pawn)),
            (C8, Piece(White, Bishop)),
        ]);

        let casualties = detonate(&mut b, Move(B6, A8));

        assert!(casualties.contains(&(Piece(Black, King), B8)));
        assert_eq!(casualties.len(), 4);
        assert_eq!(Vec::from_iter(b.iter()), vec![
            (Piece(Black, Pawn), B7),
            (Piece(White, Bishop), C8),
        ]);
    }

    #[test]
    fn explosions_may_destroy_both_kings() {
        let mut b = board(&[
            (D1, Piece(White, Queen)),
            (D5, Piece(Black, Rook)),
            (C4, Piece(White, King)),
            (E6, Piece(Black, King)),
        ]);

        detonate(&mut b, Move(D1, D5));

        assert_eq!(b.king(White), None);
        assert_eq!(b.king(Black), None);
    }

    #[test]
    fn casualties_are_printed_as_pieces_on_squares() {
        let mut b = board(&[(A1, Piece(White, Rook)), (A8, Piece(Black, Rook))]);
        assert_eq!(detonate(&mut b, Move(A1, A8)).to_string(), "Ra1, ra8");
    }
}
