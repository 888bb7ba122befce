//! # holdem CLI
//!
//! Command-line front end for `holdem-engine`. It owns one [`GameState`] at a
//! time, feeds it actions read from stdin, renders the result and appends
//! finished hands to a JSONL history.
//!
//! [`GameState`]: holdem_engine::game::GameState
//!
//! ## Subcommands
//!
//! - `eval`: Evaluate 5 to 7 cards
//! - `deal`: Deal a single hand for inspection
//! - `play`: Play hands, both seats typed on stdin
//! - `cfg`: Display current configuration settings
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "eval", "As", "Ks", "Qs", "Js", "Ts"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command};
pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "deal", "play", "cfg"];

/// Parses `args` and runs the subcommand, reading interactive input from the
/// process stdin.
///
/// Returns the exit code: `0` on success, `2` on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout with success
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: holdem <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: holdem --help");
            return exit_code::ERROR;
        }
    };

    let name = cli.cmd.name();
    let result = match cli.cmd {
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Play { hands, seed, log } => {
            handle_play_command(hands, seed, log.as_deref(), input, out, err)
        }
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(command = name, error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
