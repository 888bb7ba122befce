use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Heads-up Texas Hold'em from the command line.
#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Heads-up Texas Hold'em engine CLI")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the best five-card hand in 5 to 7 cards (e.g. `As Kd Qh Jc Ts`)
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Deal one hand and show hole cards, blinds and who acts first
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play hands with both seats' actions read from stdin
    Play {
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Append a JSONL hand history to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Eval { .. } => "eval",
            Commands::Deal { .. } => "deal",
            Commands::Play { .. } => "play",
            Commands::Cfg => "cfg",
        }
    }
}
