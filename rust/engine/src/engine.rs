//! Pure transition functions over [`GameState`].
//!
//! Each function takes the current state by reference and returns the next
//! one, leaving the input untouched. This is the surface an outer server layer
//! drives: load the state, apply one request, persist the returned value.

use crate::errors::GameError;
use crate::game::GameState;
use crate::player::Action;

/// Returns the state with the next hand dealt: dealer rotated, blinds posted,
/// hole cards dealt and the non-dealer to act.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{apply_action, deal_new_hand};
/// use holdem_engine::game::{GameConfig, GameState, Phase, WinReason};
/// use holdem_engine::player::Action;
///
/// let game = GameState::new("demo", [("alice", "Alice"), ("bob", "Bob")], GameConfig::default()).unwrap();
/// let dealt = deal_new_hand(&game).unwrap();
/// assert_eq!(dealt.phase(), Phase::Preflop);
/// assert_eq!(dealt.dealer_index(), 0);
/// assert_eq!(dealt.pot(), 30);
///
/// // Bob is not the dealer, so Bob posted the small blind and acts first.
/// let done = apply_action(&dealt, "bob", Action::Fold).unwrap();
/// assert_eq!(done.win_reason(), Some(WinReason::OpponentFolded));
/// assert_eq!(done.players()[0].stack(), 1010);
/// assert_eq!(done.players()[1].stack(), 990);
/// assert_eq!(game.phase(), Phase::Waiting);
/// ```
pub fn deal_new_hand(state: &GameState) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.deal_new_hand()?;
    Ok(next)
}

/// Returns the state after `player_id` performs `action`. On error the caller
/// keeps its original state; nothing was changed.
pub fn apply_action(
    state: &GameState,
    player_id: &str,
    action: Action,
) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.apply_action(player_id, action)?;
    Ok(next)
}

/// Same as [`apply_action`] for requests that arrive as a verb plus an
/// optional amount, e.g. decoded from JSON.
///
/// ```
/// use holdem_engine::engine::{apply_request, deal_new_hand};
/// use holdem_engine::errors::GameError;
/// use holdem_engine::game::{GameConfig, GameState};
///
/// let game = GameState::new("g", [("a", "A"), ("b", "B")], GameConfig::default()).unwrap();
/// let dealt = deal_new_hand(&game).unwrap();
/// assert_eq!(apply_request(&dealt, "b", "raise", None), Err(GameError::AmountRequired));
/// assert!(apply_request(&dealt, "b", "raise", Some(60)).is_ok());
/// ```
pub fn apply_request(
    state: &GameState,
    player_id: &str,
    kind: &str,
    amount: Option<u32>,
) -> Result<GameState, GameError> {
    let action = Action::from_parts(kind, amount)?;
    apply_action(state, player_id, action)
}
