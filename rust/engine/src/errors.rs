use thiserror::Error;

use crate::cards::Card;

/// Rejections from the hand evaluator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("Hand must contain 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Duplicate card {0} in hand")]
    DuplicateCard(Card),
}

/// Rejections from the game state machine. A rejected call never changes the state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Fewer than two players can cover the big blind")]
    InsufficientPlayers,
    #[error("Fewer than two players have chips left")]
    NotEnoughChips,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("Unknown player '{0}'")]
    UnknownPlayer(String),
    #[error("Player already folded")]
    AlreadyFolded,
    #[error("No hand has been dealt yet")]
    HandNotDealt,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("Raise requires an amount")]
    AmountRequired,
    #[error("Unknown action '{0}'")]
    UnknownAction(String),
    #[error("Raise to {amount} is below the minimum of {minimum}")]
    BelowMinimumRaise { amount: u32, minimum: u32 },
    #[error("Cannot check while facing a bet of {to_call}")]
    CannotCheck { to_call: u32 },
    #[error("Cannot raise when no opponent is able to respond")]
    RaiseNotAllowed,
    #[error("Deck ran out of cards")]
    DeckExhausted,
    #[error("Card {0} appears more than once in the deck")]
    DuplicateDeckCard(Card),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Hand(#[from] HandError),
}
