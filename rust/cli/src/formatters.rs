//! Card, board, and action formatting for terminal display.
//!
//! Unicode suit symbols (♥ ♦ ♣ ♠) are used where the terminal is expected to
//! render them, plain letters otherwise.

use holdem_engine::cards::{Card, Suit};
use holdem_engine::game::{GameState, Phase};
use holdem_engine::player::Action;

/// On Windows only modern terminals are trusted with Unicode; elsewhere it is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

/// ```rust
/// use holdem_engine::cards::{Card, Rank, Suit};
/// # use holdem_cli::formatters::format_card;
///
/// let ace_spades = Card::new(Rank::Ace, Suit::Spades);
/// let formatted = format_card(&ace_spades);
/// assert!(formatted == "A♠" || formatted == "As");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_action(action: &Action) -> String {
    match action {
        Action::Fold => "fold".to_string(),
        Action::Check => "check".to_string(),
        Action::Call => "call".to_string(),
        Action::Raise(to) => format!("raise to {}", to),
    }
}

/// Name of the street a board of this phase shows, for headings.
pub fn street_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Flop => "Flop",
        Phase::Turn => "Turn",
        Phase::River => "River",
        _ => "Board",
    }
}

/// One-line status: pot, stacks and whose turn it is.
pub fn format_status(state: &GameState) -> String {
    let p = state.players();
    let turn = match state.to_act() {
        Some(seat) => format!(
            " | to act: {} (to call {})",
            p[seat].id,
            state.to_call(seat)
        ),
        None => String::new(),
    };
    format!(
        "Pot: {} | {}: {} | {}: {}{}",
        state.pot(),
        p[0].id,
        p[0].stack(),
        p[1].id,
        p[1].stack(),
        turn
    )
}
