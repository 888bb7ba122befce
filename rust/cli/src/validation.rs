//! Parsing of typed player input for the interactive `play` command.

use holdem_engine::player::Action;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a typed action (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call
/// - "raise X" or "bet X" → Raise to a street total of X
/// - "q" or "quit" → Quit
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::Action;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(Action::Fold));
/// assert_eq!(parse_player_action("raise 60"), ParseResult::Action(Action::Raise(60)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("shove") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "c" => ParseResult::Action(Action::Check),
        "call" => ParseResult::Action(Action::Call),
        "raise" | "bet" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(format!(
                    "{} requires an amount (e.g., '{} 60')",
                    verb, verb
                ));
            };
            match amount.parse::<u32>() {
                Ok(to) if to > 0 => ParseResult::Action(Action::Raise(to)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid amount '{}'", amount)),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, q",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_without_amount_is_invalid() {
        assert!(matches!(parse_player_action("raise"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("bet 0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("bet x"), ParseResult::Invalid(_)));
    }

    #[test]
    fn input_is_case_and_space_insensitive() {
        assert_eq!(parse_player_action("  CALL "), ParseResult::Action(Action::Call));
        assert_eq!(parse_player_action("Bet 40"), ParseResult::Action(Action::Raise(40)));
        assert_eq!(parse_player_action(""), ParseResult::Invalid("Empty input".into()));
    }
}
