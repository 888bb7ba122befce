//! `holdem deal`: deal one hand and show its opening position.

use std::io::Write;

use holdem_engine::engine::deal_new_hand;
use holdem_engine::game::GameState;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_status};

/// Deals hand 1 of a fresh game and prints the seed, blinds, hole cards and
/// the seat to act. Seat 0 deals hand 1 and posts the big blind.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let game = GameState::new("deal", [("p1", "P1"), ("p2", "P2")], cfg.game_config(seed))?;
    let state = deal_new_hand(&game)?;

    let dealer = state.dealer_index();
    let players = state.players();
    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Dealer: {} posts big blind {}",
        players[dealer].id,
        cfg.big_blind
    )?;
    writeln!(
        out,
        "Non-dealer: {} posts small blind {}",
        players[1 - dealer].id,
        cfg.small_blind
    )?;
    for p in players {
        writeln!(out, "Hole {}: {}", p.id, format_board(p.hole_cards()))?;
    }
    writeln!(out, "{}", format_status(&state))?;
    Ok(())
}
