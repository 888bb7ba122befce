//! `holdem eval`: best-five evaluation of cards given on the command line.

use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate;

use crate::error::CliError;
use crate::formatters::format_board;

/// Evaluates the cards in `args` (each argument may hold several cards) and
/// prints category, description, score, best five and kickers.
pub fn handle_eval_command(args: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&args.join(" "))?;
    let result = evaluate(&cards)?;

    let kickers: Vec<String> = result
        .kickers
        .iter()
        .map(|r| r.symbol().to_string())
        .collect();
    writeln!(out, "Hand: {}", result.description)?;
    writeln!(out, "Category: {:?}", result.category)?;
    writeln!(out, "Score: {}", result.score)?;
    writeln!(out, "Best five: {}", format_board(&result.best_five))?;
    if kickers.is_empty() {
        writeln!(out, "Kickers: -")?;
    } else {
        writeln!(out, "Kickers: {}", kickers.join(" "))?;
    }
    Ok(())
}
