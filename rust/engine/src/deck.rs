use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};

/// A single-use deck: built fresh for every hand, dealt from the top, then dropped.
///
/// The RNG is only used while shuffling, so the deck itself is plain data and
/// survives a serialize/deserialize cycle together with the game state.
///
/// # Examples
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut a = Deck::shuffled(42);
/// let mut b = Deck::shuffled(42);
/// assert_eq!(a.deal_card(), b.deal_card());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Unshuffled deck in suit-major order.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards, position: 0 }
    }

    /// Deck dealt in exactly the given order, first card first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Discards the top card, returning it; `None` once the deck is empty.
    pub fn burn_card(&mut self) -> Option<Card> {
        self.deal_card()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// First undealt card that appears again further down the deck.
    ///
    /// ```
    /// use holdem_engine::cards::parse_cards;
    /// use holdem_engine::deck::Deck;
    ///
    /// let deck = Deck::from_cards(parse_cards("As Kd As").unwrap());
    /// assert_eq!(deck.first_duplicate(), parse_cards("As").unwrap().first().copied());
    /// assert_eq!(Deck::shuffled(7).first_duplicate(), None);
    /// ```
    pub fn first_duplicate(&self) -> Option<Card> {
        let mut seen = HashSet::with_capacity(self.remaining());
        self.cards
            .iter()
            .skip(self.position)
            .copied()
            .find(|c| !seen.insert(*c))
    }
}
