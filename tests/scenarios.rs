use lib::atomic::{Game, GameState, MoveError, MutualDestruction, Rules};
use lib::chess::{Board, Color, Move, Piece, Role, Square};
use Color::*;
use Role::*;
use Square::*;

fn game(rules: Rules, pieces: &[(Square, Piece)]) -> Game {
    let mut board = Board::empty();
    for &(sq, p) in pieces {
        board.set(sq, Some(p));
    }

    Game::with_board(rules, board, White)
}

#[test]
fn back_rank_rook_capture_consumes_the_rook() {
    let mut g = game(
        Rules::default(),
        &[
            (A1, Piece(White, Rook)),
            (E1, Piece(White, King)),
            (A8, Piece(Black, Rook)),
            (B8, Piece(Black, Knight)),
            (E8, Piece(Black, King)),
        ],
    );

    let played = g.submit("a1", "a8").unwrap();
    assert!(played.is_capture());
    assert_eq!(played.casualties().len(), 3);

    assert_eq!(g.piece_at(A1), None);
    assert_eq!(g.piece_at(A8), None);
    assert_eq!(g.piece_at(B8), None);
    assert_eq!(g.state(), GameState::InProgress);
    assert_eq!(g.turn(), Black);
}

#[test]
fn pawns_survive_the_blast_ring() {
    let mut g = game(
        Rules::default(),
        &[
            (E1, Piece(White, King)),
            (E4, Piece(White, Pawn)),
            (D5, Piece(Black, Knight)),
            (C6, Piece(Black, Pawn)),
            (E6, Piece(Black, Bishop)),
            (E8, Piece(Black, King)),
        ],
    );

    assert!(g.submit("e4", "d5").is_ok());
    assert_eq!(g.piece_at(E4), None);
    assert_eq!(g.piece_at(D5), None);
    assert_eq!(g.piece_at(C6), Some(Piece(Black, Pawn)));
    assert_eq!(g.piece_at(E6), None);
}

#[test]
fn destroying_a_king_finishes_the_game() {
    let mut g = game(
        Rules::default(),
        &[
            (A1, Piece(White, King)),
            (E2, Piece(White, Rook)),
            (E7, Piece(Black, Knight)),
            (E8, Piece(Black, King)),
        ],
    );

    assert!(g.submit("e2", "e7").is_ok());
    assert_eq!(g.state(), GameState::WhiteWon);
    assert_eq!(g.state().winner(), Some(White));

    let before = g.clone();
    assert_eq!(
        g.submit("a1", "a2"),
        Err(MoveError::GameAlreadyFinished(GameState::WhiteWon))
    );

    assert_eq!(
        g.submit("h7", "h5"),
        Err(MoveError::GameAlreadyFinished(GameState::WhiteWon))
    );

    assert_eq!(g, before);
}

#[test]
fn pawn_double_move_requires_a_clear_path() {
    let mut g = Game::default();
    assert!(g.submit("e2", "e4").is_ok());

    let mut board = Board::default();
    board.set(E3, Some(Piece(Black, Knight)));
    let mut g = Game::with_board(Rules::default(), board, White);
    assert_eq!(g.submit("e2", "e4"), Err(MoveError::IllegalMove(Move(E2, E4))));
    assert_eq!(g.board(), &board);
}

#[test]
fn kings_never_capture() {
    let mut g = game(
        Rules::default(),
        &[
            (E1, Piece(White, King)),
            (E2, Piece(Black, Pawn)),
            (E8, Piece(Black, King)),
        ],
    );

    let before = g.clone();
    assert_eq!(g.submit("e1", "e2"), Err(MoveError::IllegalMove(Move(E1, E2))));
    assert_eq!(g, before);
    assert!(g.submit("e1", "d1").is_ok());
}

#[test]
fn destroying_both_kings_is_forbidden_by_default() {
    let pieces = [
        (D1, Piece(White, King)),
        (E5, Piece(White, Rook)),
        (E2, Piece(Black, Knight)),
        (F2, Piece(Black, King)),
    ];

    let mut g = game(Rules::default(), &pieces);
    let before = g.clone();
    assert_eq!(g.submit("e5", "e2"), Err(MoveError::IllegalMove(Move(E5, E2))));
    assert_eq!(g, before);

    let rules = Rules {
        mutual_destruction: MutualDestruction::Draw,
    };

    let mut g = game(rules, &pieces);
    assert!(g.submit("e5", "e2").is_ok());
    assert_eq!(g.state(), GameState::Draw);
    assert_eq!(g.state().winner(), None);
    assert!(g.board().is_empty());
}
