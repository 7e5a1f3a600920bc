use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;
use lib::atomic::Rules;

mod play;
mod replay;

#[derive(Debug, From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Replay(replay::Replay),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self, rules: Rules) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(rules),
            Applet::Replay(a) => a.execute(rules),
        }
    }
}
