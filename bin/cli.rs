use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::atomic::Rules;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Atomic Chess on the command line.
///
/// Captures explode, destroying every piece but pawns around the destination square,
/// and the game is won by blowing up the opponent's king.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// How much to log on stderr.
    #[clap(short, long, global = true)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// The rules in RON, e.g. `(mutual_destruction: draw)`.
    #[clap(short, long, global = true, default_value_t)]
    rules: Rules,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Logs this crate's events on stderr at the chosen verbosity, dependencies at `WARN` at most.
    pub fn install_logger(&self) {
        let filter = Targets::new()
            .with_targets([("cli", self.verbosity), ("lib", self.verbosity)])
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();
    }

    #[instrument(level = "trace", skip(self), fields(rules = %self.rules), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.applet.unwrap_or_default().execute(self.rules)
    }
}
