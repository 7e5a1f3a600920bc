use crate::chess::{Board, Color};
use derive_more::Display;

/// The state of a game of Atomic Chess.
///
/// Once the game leaves [`GameState::InProgress`] it never returns.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameState {
    #[default]
    #[display(fmt = "in progress")]
    InProgress,

    #[display(fmt = "white won by destroying the black king")]
    WhiteWon,

    #[display(fmt = "black won by destroying the white king")]
    BlackWon,

    #[display(fmt = "draw by mutual destruction")]
    Draw,
}

impl GameState {
    /// Assesses the state of the game from the kings left on the [`Board`].
    pub fn assess(board: &Board) -> Self {
        match (board.king(Color::White), board.king(Color::Black)) {
            (Some(_), Some(_)) => GameState::InProgress,
            (Some(_), None) => GameState::WhiteWon,
            (None, Some(_)) => GameState::BlackWon,
            (None, None) => GameState::Draw,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        *self != GameState::InProgress
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
            GameState::InProgress | GameState::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Piece, Role, Square};
    use test_strategy::proptest;

    #[test]
    fn game_starts_in_progress() {
        assert_eq!(GameState::default(), GameState::InProgress);
        assert_eq!(GameState::assess(&Board::default()), GameState::InProgress);
    }

    #[proptest]
    fn game_is_over_unless_in_progress(s: GameState) {
        assert_eq!(s.is_over(), s != GameState::InProgress);
    }

    #[proptest]
    fn only_finished_games_have_winners(s: GameState) {
        if s.winner().is_some() {
            assert!(s.is_over());
        }
    }

    #[proptest]
    fn side_left_with_a_king_wins(b: Board, c: Color) {
        let mut b = b;
        for sq in b.by_piece(Piece(!c, Role::King)) {
            b.set(sq, None);
        }

        if b.king(c).is_some() {
            assert_eq!(GameState::assess(&b).winner(), Some(c));
        }
    }

    #[test]
    fn game_is_drawn_if_both_kings_are_gone() {
        let mut b = Board::default();
        b.set(Square::E1, None);
        b.set(Square::E8, None);
        assert_eq!(GameState::assess(&b), GameState::Draw);
    }
}
