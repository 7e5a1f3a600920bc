use crate::atomic::{explosion, legality, Casualties, GameState, MutualDestruction, Rules};
use crate::chess::{Bitboard, Board, Color, Move, ParseSquareError, Piece, Square};
use derive_more::{Deref, Display, Error};
use std::fmt;
use tracing::{debug, info, instrument};

/// The reason why a move was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum MoveError {
    #[display(fmt = "there is no piece of the side to move on `{_0}`")]
    NotYourPiece(#[error(not(source))] Square),

    #[display(fmt = "move `{_0}` is illegal in this position")]
    IllegalMove(#[error(not(source))] Move),

    #[display(fmt = "the game has already finished, {_0}")]
    GameAlreadyFinished(#[error(not(source))] GameState),

    #[display(fmt = "malformed square notation")]
    MalformedNotation(ParseSquareError),
}

/// A [`Move`] that was played, along with the [`Piece`] that moved and the [`Casualties`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deref)]
pub struct Played(#[deref] pub Move, pub Piece, pub Casualties);

impl Played {
    /// The [`Piece`] moved.
    pub fn piece(&self) -> Piece {
        self.1
    }

    /// The pieces destroyed by the move, empty unless it was a capture.
    pub fn casualties(&self) -> &Casualties {
        &self.2
    }

    /// Whether this move was a capture.
    pub fn is_capture(&self) -> bool {
        !self.casualties().is_empty()
    }
}

impl fmt::Display for Played {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece(), self.0)?;
        if self.is_capture() {
            write!(f, " exploding {}", self.casualties())?;
        }

        Ok(())
    }
}

/// The result of submitting a move.
pub type MoveResult = Result<Played, MoveError>;

/// A game of Atomic Chess.
///
/// Owns the [`Board`], the side to move and the [`GameState`], which only ever change through
/// [`Game::play`] and [`Game::submit`]. A rejected move leaves the game untouched.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    rules: Rules,
    board: Board,
    turn: Color,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Rules::default())
    }
}

impl Game {
    /// A new game from the standard starting arrangement, white to move.
    pub fn new(rules: Rules) -> Self {
        Game::with_board(rules, Board::default(), Color::White)
    }

    /// A game from an arbitrary arrangement.
    ///
    /// The [`GameState`] is assessed from the kings on the board.
    pub fn with_board(rules: Rules, board: Board, turn: Color) -> Self {
        Game {
            rules,
            board,
            turn,
            state: GameState::assess(&board),
        }
    }

    /// Starts over from the standard starting arrangement, keeping the [`Rules`].
    #[instrument(level = "debug", skip(self))]
    pub fn new_game(&mut self) {
        *self = Game::new(self.rules);
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Piece`] on a [`Square`], if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq]
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current [`GameState`].
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The squares the piece on `whence` may move to.
    ///
    /// Empty unless the game is in progress and the piece belongs to the side to move.
    pub fn destinations(&self, whence: Square) -> Bitboard {
        if self.state.is_over() || !legality::owns(&self.board, whence, self.turn) {
            Bitboard::empty()
        } else {
            legality::destinations(&self.board, whence)
        }
    }

    /// Plays a move given the algebraic notation of its source and destination squares.
    pub fn submit(&mut self, whence: &str, whither: &str) -> MoveResult {
        if self.state.is_over() {
            return Err(MoveError::GameAlreadyFinished(self.state));
        }

        let whence = whence.parse().map_err(MoveError::MalformedNotation)?;
        let whither = whither.parse().map_err(MoveError::MalformedNotation)?;
        self.play(Move(whence, whither))
    }

    /// Plays a [`Move`] if legal, otherwise returns the reason why not.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), ret)]
    pub fn play(&mut self, m: Move) -> MoveResult {
        if self.state.is_over() {
            return Err(MoveError::GameAlreadyFinished(self.state));
        }

        let piece = match self.board[m.whence()] {
            Some(p) if legality::owns(&self.board, m.whence(), self.turn) => p,
            _ => return Err(MoveError::NotYourPiece(m.whence())),
        };

        if !legality::is_legal(&self.board, piece, m) {
            return Err(MoveError::IllegalMove(m));
        }

        let mut board = self.board;
        let casualties = if board[m.whither()].is_some() {
            let casualties = explosion::detonate(&mut board, m);
            debug!(%casualties, "explosion");
            casualties
        } else {
            board.set(m.whence(), None);
            board.set(m.whither(), Some(piece));
            Casualties::default()
        };

        let state = GameState::assess(&board);
        if state == GameState::Draw && self.rules.mutual_destruction == MutualDestruction::Forbid {
            debug!("capture would destroy both kings");
            return Err(MoveError::IllegalMove(m));
        }

        self.board = board;
        self.state = state;

        if state.is_over() {
            info!(%state, "game over");
        } else {
            self.turn = !self.turn;
        }

        Ok(Played(m, piece, casualties))
    }
}
