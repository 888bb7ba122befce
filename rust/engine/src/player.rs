use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Stable identity supplied by the lobby/auth layer; unchanged across hands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        PlayerId(s)
    }
}

/// Blind a seat posts in the current hand. Heads-up the dealer posts the big blind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Dealer / button, posts the big blind
    BigBlind,
    /// Non-dealer, posts the small blind and acts first on every street
    SmallBlind,
}

/// A player decision. Raises carry the total street bet being raised to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when there is nothing to call)
    Check,
    /// Match the current bet, or go all-in trying
    Call,
    /// Raise the street bet to the given total
    Raise(u32),
}

impl Action {
    /// Builds an action from loosely typed transport input such as `("raise", Some(60))`.
    ///
    /// ```
    /// use holdem_engine::errors::GameError;
    /// use holdem_engine::player::Action;
    ///
    /// assert_eq!(Action::from_parts("raise", Some(60)), Ok(Action::Raise(60)));
    /// assert_eq!(Action::from_parts("raise", None), Err(GameError::AmountRequired));
    /// ```
    pub fn from_parts(kind: &str, amount: Option<u32>) -> Result<Action, GameError> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(Action::Fold),
            "check" => Ok(Action::Check),
            "call" => Ok(Action::Call),
            "raise" | "bet" => amount.map(Action::Raise).ok_or(GameError::AmountRequired),
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => f.write_str("fold"),
            Action::Check => f.write_str("check"),
            Action::Call => f.write_str("call"),
            Action::Raise(to) => write!(f, "raise {}", to),
        }
    }
}

/// A seated player: chip stack that persists across hands plus per-hand fields
/// that [`Player::reset_for_hand`] clears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Chips behind, not yet committed to the pot
    pub stack: u32,
    /// Hole cards (0 or 2)
    pub hole: Vec<Card>,
    /// Chips put in on the current street
    pub street_bet: u32,
    /// Chips put in over the whole hand
    pub committed: u32,
    pub folded: bool,
    pub all_in: bool,
    /// Acted at least once on the current street (blinds don't count)
    pub has_acted: bool,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stack,
            hole: Vec::with_capacity(2),
            street_bet: 0,
            committed: 0,
            folded: false,
            all_in: false,
            has_acted: false,
        }
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn give_card(&mut self, c: Card) {
        debug_assert!(self.hole.len() < 2, "hole cards already full");
        self.hole.push(c);
    }

    pub fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.street_bet = 0;
        self.committed = 0;
        self.folded = false;
        self.all_in = false;
        self.has_acted = false;
    }

    pub fn reset_for_street(&mut self) {
        self.street_bet = 0;
        self.has_acted = false;
    }

    /// Still contesting the pot and able to put in more chips.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves up to `amount` chips from the stack into this street's bet and
    /// returns what was actually moved. Emptying the stack flags the player all-in.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.street_bet += moved;
        self.committed += moved;
        if self.stack == 0 {
            self.all_in = true;
        }
        moved
    }
}
