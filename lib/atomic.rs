//! The rules of [Atomic Chess].
//!
//! Captures cause an explosion that destroys every piece other than a pawn on the squares
//! surrounding the destination, along with the capturing and the captured piece. The game is won
//! by destroying the opponent's king.
//!
//! [Atomic Chess]: https://en.wikipedia.org/wiki/Atomic_chess

pub mod explosion;
pub mod legality;

mod game;
mod rules;
mod state;

pub use explosion::Casualties;
pub use game::*;
pub use rules::*;
pub use state::*;
