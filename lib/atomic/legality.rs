use crate::chess::{Bitboard, Board, Color, Move, Piece, Rank, Role, Square};
use crate::util::Integer;

/// Whether the piece on the source square of a [`Move`] belongs to the side to move.
///
/// An empty source square belongs to no one.
#[inline(always)]
pub fn owns(board: &Board, whence: Square, turn: Color) -> bool {
    board.by_color(turn).contains(whence)
}

/// Whether a [`Piece`] may perform a [`Move`] on a [`Board`].
///
/// This only accounts for the geometry of the move and the occupancy of the board, so it is up
/// to the caller to ensure the piece belongs to the side to move.
pub fn is_legal(board: &Board, piece: Piece, m: Move) -> bool {
    let Piece(side, role) = piece;

    if board.by_color(side).contains(m.whither()) {
        return false;
    }

    let (df, dr) = (m.files(), m.ranks());
    let straight = (df == 0) != (dr == 0);
    let diagonal = df != 0 && df.abs() == dr.abs();
    let clear = || (Bitboard::segment(m.whence(), m.whither()) & board.occupied()).is_empty();

    match role {
        Role::Rook => straight && clear(),
        Role::Bishop => diagonal && clear(),
        Role::Queen => (straight || diagonal) && clear(),
        Role::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),

        // A capturing king would be caught in its own explosion.
        Role::King => {
            let step = df.abs() <= 1 && dr.abs() <= 1 && (df, dr) != (0, 0);
            step && !board.occupied().contains(m.whither())
        }

        Role::Pawn => {
            let (forward, home) = match side {
                Color::White => (1, Rank::Second),
                Color::Black => (-1, Rank::Seventh),
            };

            match (df.abs(), dr * forward) {
                (0, 1) => board[m.whither()].is_none(),
                (0, 2) => m.whence().rank() == home && clear() && board[m.whither()].is_none(),
                (1, 1) => board.by_color(!side).contains(m.whither()),
                _ => false,
            }
        }
    }
}

/// The squares the piece on `whence` may move to.
///
/// Empty if there is no piece on `whence`.
pub fn destinations(board: &Board, whence: Square) -> Bitboard {
    match board[whence] {
        None => Bitboard::empty(),
        Some(p) => Square::iter()
            .filter(|&whither| is_legal(board, p, Move(whence, whither)))
            .collect(),
    }
}
