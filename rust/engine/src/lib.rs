//! # holdem-engine: heads-up Texas Hold'em core
//!
//! A deterministic two-player No-Limit Hold'em engine: a 5-to-7 card hand
//! evaluator and a betting state machine that takes a game from the blinds
//! through showdown and on into the next hand.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Seeded ChaCha20 shuffling
//! - [`hand`] - Best-five evaluation with a total-order score
//! - [`player`] - Player identity, seat state and actions
//! - [`rules`] - Bet sizing validation and all-in capping
//! - [`pot`] - Main pot / side pot layering
//! - [`game`] - `GameState` and its transitions
//! - [`engine`] - Pure state-in, state-out wrappers around the transitions
//! - [`logger`] - Hand records and JSONL hand history
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let result = evaluate(&cards).unwrap();
//! assert_eq!(result.category, Category::RoyalFlush);
//! ```
//!
//! ## Playing a hand
//!
//! ```rust
//! use holdem_engine::game::{GameConfig, GameState, Phase};
//! use holdem_engine::player::Action;
//!
//! let mut game = GameState::new("g1", [("p1", "Ann"), ("p2", "Ben")], GameConfig::default()).unwrap();
//! game.deal_new_hand().unwrap();
//!
//! // seat 0 deals hand 1 and posts the big blind; seat 1 opens
//! game.apply_action("p2", Action::Call).unwrap();
//! game.apply_action("p1", Action::Check).unwrap();
//! assert_eq!(game.phase(), Phase::Flop);
//! assert_eq!(game.community().len(), 3);
//! assert_eq!(game.to_act(), Some(1));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let a = Deck::shuffled(42);
//! let b = Deck::shuffled(42);
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
