use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::atomic::{Game, Rules};
use lib::chess::Move;
use std::io::{stdout, Write};
use tracing::{info, instrument};

/// Replay a sequence of moves and print the final position.
#[derive(Debug, Parser)]
pub struct Replay {
    /// The moves in pure coordinate notation, e.g. `e2e4`.
    moves: Vec<Move>,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self, rules: Rules) -> Result<(), Anyhow> {
        self.run(rules, &mut stdout().lock())
    }

    fn run<W: Write>(self, rules: Rules, writer: &mut W) -> Result<(), Anyhow> {
        let mut game = Game::new(rules);

        for m in self.moves {
            let played = game.play(m).with_context(|| format!("failed to play `{m}`"))?;
            info!(%played);
        }

        writeln!(writer, "{}", game.board())?;

        match game.state() {
            s if s.is_over() => writeln!(writer, "game over, {s}")?,
            _ => writeln!(writer, "{} to move", game.turn())?,
        }

        Ok(())
    }
}
