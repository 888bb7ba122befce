//! # Play Command
//!
//! Plays heads-up hands with both seats typed on stdin. Each prompt names the
//! seat to act; rejected input prints the reason and prompts again. Finished
//! hands can be appended to a JSONL hand history with `--log`.
//!
//! Play stops after `--hands` hands, on `q`/EOF, or when a seat can no longer
//! post the big blind.

use std::io::{BufRead, Write};
use std::path::Path;

use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::logger::{HandLogger, HandRecord};

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_status, street_label};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

const PROMPT: &str = "fold/check/call/raise N/q";

/// Handle the play command.
///
/// # Arguments
///
/// * `hands` - Number of hands to play (must be >= 1)
/// * `seed` - Base shuffle seed; falls back to the configured seed, then random
/// * `log` - Optional JSONL file to append hand records to
/// * `input` - Source of typed actions
pub fn handle_play_command(
    hands: u32,
    seed: Option<u64>,
    log: Option<&Path>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut game = GameState::new("play", [("p1", "P1"), ("p2", "P2")], cfg.game_config(seed))?;
    let mut logger = log.map(HandLogger::append).transpose()?;

    writeln!(out, "play: hands={} seed={}", hands, seed)?;
    writeln!(out, "Blinds: SB={} BB={}", cfg.small_blind, cfg.big_blind)?;

    let mut played = 0u32;
    for _ in 0..hands {
        match game.deal_new_hand() {
            Ok(()) => {}
            Err(e @ (GameError::NotEnoughChips | GameError::InsufficientPlayers)) => {
                ui::display_warning(err, &format!("stopping early: {}", e))?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        if !play_hand(&mut game, input, out, err)? {
            writeln!(out, "Quit requested.")?;
            break;
        }
        played += 1;
        if let Some(logger) = logger.as_mut() {
            logger.write(&HandRecord::from_state(&game)?)?;
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    let p = game.players();
    writeln!(
        out,
        "Final stacks: {} {} | {} {}",
        p[0].id,
        p[0].stack(),
        p[1].id,
        p[1].stack()
    )?;
    Ok(())
}

/// Runs one dealt hand to completion. Returns `false` if the user quit.
fn play_hand(
    game: &mut GameState,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    let dealer = game.dealer_index();
    writeln!(out, "Hand {}", game.hand_number())?;
    writeln!(out, "Dealer: {}", game.players()[dealer].id)?;
    for p in game.players() {
        writeln!(out, "Hole {}: {}", p.id, format_board(p.hole_cards()))?;
    }

    let mut shown = 0;
    while let Some(seat) = game.to_act() {
        if game.community().len() != shown {
            shown = game.community().len();
            writeln!(
                out,
                "{}: {}",
                street_label(game.phase()),
                format_board(game.community())
            )?;
        }
        writeln!(out, "{}", format_status(game))?;

        let id = game.players()[seat].id.clone();
        write!(out, "{} ({}): ", id, PROMPT)?;
        out.flush()?;
        let Some(line) = read_stdin_line(input) else {
            return Ok(false);
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => match game.apply_action(id.as_str(), action) {
                Ok(()) => writeln!(out, "Action: {} {}", id, format_action(&action))?,
                Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
            },
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    report_result(game, out)?;
    Ok(true)
}

fn report_result(game: &GameState, out: &mut dyn Write) -> Result<(), CliError> {
    let players = game.players();
    if !game.community().is_empty() {
        writeln!(out, "Board: {}", format_board(game.community()))?;
    }
    if let Some(sd) = game.showdown() {
        for shown in &sd.hands {
            let p = &players[shown.seat];
            writeln!(
                out,
                "Showdown {}: {} {}",
                p.id,
                format_board(p.hole_cards()),
                shown.hand.description
            )?;
        }
    }
    match (game.winner(), game.win_reason()) {
        (Some(seat), Some(reason)) => {
            writeln!(out, "Result: {} wins ({})", players[seat].id, reason)?
        }
        (None, Some(reason)) => writeln!(out, "Result: {}", reason)?,
        _ => {}
    }
    writeln!(out, "{}", format_status(game))?;
    Ok(())
}
