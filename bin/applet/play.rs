use crate::io::Io;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::atomic::{Game, Rules};
use std::io::{stdin, stdout, ErrorKind, Read, Write};
use tracing::{info, instrument, warn};

/// Play a game of Atomic Chess on the terminal.
///
/// Moves are entered as a pair of squares, e.g. `e2e4` or `e2 e4`.
/// Enter `new` to start over and `quit` to leave.
#[derive(Debug, Default, Parser)]
pub struct Play {}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self, rules: Rules) -> Result<(), Anyhow> {
        let io = Io::new(stdout().lock(), stdin().lock());
        Session::new(Game::new(rules), io).run()
    }
}

struct Session<W: Write, R: Read> {
    game: Game,
    io: Io<W, R>,
}

impl<W: Write, R: Read> Session<W, R> {
    fn new(game: Game, io: Io<W, R>) -> Self {
        Session { game, io }
    }

    fn run(&mut self) -> Result<(), Anyhow> {
        self.io.send(self.game.board())?;

        loop {
            match self.game.state() {
                s if s.is_over() => self.io.send(format_args!("game over, {s}"))?,
                _ => self.io.send(format_args!("{} to move", self.game.turn()))?,
            }

            self.io.flush()?;

            let line = match self.io.recv() {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                line => line.context("failed to read from the standard input")?,
            };

            match line.split_whitespace().collect::<Vec<_>>()[..] {
                [] => continue,
                ["quit"] => break,
                ["new"] => {
                    self.game.new_game();
                    self.io.send(self.game.board())?;
                }

                [m] => match m.char_indices().nth(2) {
                    Some((i, _)) => self.submit(&m[..i], &m[i..])?,
                    None => self.io.send(format_args!("unrecognized command `{m}`"))?,
                },

                [whence, whither] => self.submit(whence, whither)?,
                _ => self.io.send(format_args!("unrecognized command `{line}`"))?,
            }
        }

        Ok(self.io.flush()?)
    }

    fn submit(&mut self, whence: &str, whither: &str) -> Result<(), Anyhow> {
        match self.game.submit(whence, whither) {
            Ok(played) => {
                info!(%played);
                self.io.send(&played)?;
                self.io.send(self.game.board())?;
            }

            Err(e) => {
                warn!(%e, "move rejected");
                self.io.send(e)?;
            }
        }

        Ok(())
    }
}
