//! Best-five-of-seven hand evaluation.
//!
//! Every 5-card subset of the input is scored independently and the highest
//! score wins. Scores are a total order over all 5-card hands: a larger
//! [`HandResult::score`] is a stronger hand, equal scores are an exact tie.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::HandError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// Outcome of evaluating 5 to 7 cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    /// Total-order strength; higher beats lower.
    pub score: u32,
    /// Cards of the best five that are not part of the made combination, high to low.
    /// Empty for straights, where the top card alone decides.
    pub kickers: Vec<Rank>,
    /// The chosen five cards, most significant first.
    pub best_five: [Card; 5],
    pub description: String,
}

const CATEGORY_SHIFT: u32 = 20;

/// Evaluates the best 5-card poker hand contained in `cards`.
///
/// # Errors
///
/// - [`HandError::InvalidHandSize`] unless 5, 6 or 7 cards are given
/// - [`HandError::DuplicateCard`] when a card appears twice
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, Category};
/// use holdem_engine::cards::Rank;
///
/// let cards = parse_cards("As Ah Ad Ac Ks 2h 3d").unwrap();
/// let result = evaluate(&cards).unwrap();
/// assert_eq!(result.category, Category::FourOfAKind);
/// assert_eq!(result.kickers, vec![Rank::King]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandResult, HandError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(HandError::InvalidHandSize(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(HandError::DuplicateCard(c));
        }
    }

    let n = cards.len();
    let mut best: Option<Scored> = None;
    // Ascending masks keep the choice between equal-scoring subsets deterministic.
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[k] = c;
                k += 1;
            }
        }
        let scored = score_five(five);
        if best.as_ref().is_none_or(|b| scored.score > b.score) {
            best = Some(scored);
        }
    }

    // n >= 5 guarantees at least one subset
    let best = best.ok_or(HandError::InvalidHandSize(n))?;
    Ok(best.into_result())
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.score.cmp(&b.score)
}

struct Scored {
    category: Category,
    score: u32,
    ordered: [Card; 5],
    kickers: Vec<Rank>,
    /// Rank of the leading group (pair, trips, straight top card, ...).
    primary: Rank,
    /// Rank of the second group for two pair and full house.
    secondary: Option<Rank>,
}

impl Scored {
    fn into_result(self) -> HandResult {
        let description = describe(self.category, self.primary, self.secondary);
        HandResult {
            category: self.category,
            score: self.score,
            kickers: self.kickers,
            best_five: self.ordered,
            description,
        }
    }
}

fn score_five(mut cards: [Card; 5]) -> Scored {
    cards.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&cards);

    // (count, rank) groups, biggest group first, higher rank first within a size
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for c in &cards {
        match groups.iter_mut().find(|(_, r)| *r == c.rank) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, c.rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
    let shape: Vec<u8> = groups.iter().map(|(count, _)| *count).collect();

    let category = match (straight_high, is_flush) {
        (Some(Rank::Ace), true) => Category::RoyalFlush,
        (Some(_), true) => Category::StraightFlush,
        _ if shape[0] == 4 => Category::FourOfAKind,
        _ if shape[..2] == [3, 2] => Category::FullHouse,
        (_, true) => Category::Flush,
        (Some(_), false) => Category::Straight,
        _ if shape[0] == 3 => Category::ThreeOfAKind,
        _ if shape[..2] == [2, 2] => Category::TwoPair,
        _ if shape[0] == 2 => Category::OnePair,
        _ => Category::HighCard,
    };

    let mut tiebreak = [0u8; 5];
    let ordered;
    let kickers;
    let primary;
    let mut secondary = None;
    if let (Some(high), Category::Straight | Category::StraightFlush | Category::RoyalFlush) =
        (straight_high, category)
    {
        tiebreak[0] = high.value();
        ordered = straight_order(cards, high);
        kickers = Vec::new();
        primary = high;
    } else {
        for (slot, (_, rank)) in tiebreak.iter_mut().zip(groups.iter()) {
            *slot = rank.value();
        }
        let mut sorted = cards;
        sorted.sort_by(|a, b| {
            group_size(&groups, b.rank)
                .cmp(&group_size(&groups, a.rank))
                .then(b.rank.cmp(&a.rank))
        });
        ordered = sorted;
        kickers = groups
            .iter()
            .filter(|(count, _)| *count == 1)
            .map(|(_, rank)| *rank)
            .collect();
        primary = groups[0].1;
        if matches!(category, Category::TwoPair | Category::FullHouse) {
            secondary = Some(groups[1].1);
        }
    }

    let mut score = (category as u32) << CATEGORY_SHIFT;
    for (i, v) in tiebreak.iter().enumerate() {
        score |= (*v as u32) << (16 - 4 * i as u32);
    }

    Scored {
        category,
        score,
        ordered,
        kickers,
        primary,
        secondary,
    }
}

fn group_size(groups: &[(u8, Rank)], rank: Rank) -> u8 {
    groups
        .iter()
        .find(|(_, r)| *r == rank)
        .map_or(0, |(count, _)| *count)
}

/// Top card of a straight, with the wheel (A-2-3-4-5) reported as Five high.
/// Expects `cards` sorted by descending rank.
fn straight_high(cards: &[Card; 5]) -> Option<Rank> {
    let v: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    let distinct = v.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if v[0] - v[4] == 4 {
        return Some(cards[0].rank);
    }
    if v == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    None
}

fn straight_order(cards: [Card; 5], high: Rank) -> [Card; 5] {
    if high == Rank::Five && cards[0].rank == Rank::Ace {
        // wheel: the ace plays low
        [cards[1], cards[2], cards[3], cards[4], cards[0]]
    } else {
        cards
    }
}

fn describe(category: Category, primary: Rank, secondary: Option<Rank>) -> String {
    match (category, secondary) {
        (Category::HighCard, _) => format!("High Card, {}", primary.name()),
        (Category::OnePair, _) => format!("Pair of {}", primary.plural()),
        (Category::TwoPair, Some(low)) => {
            format!("Two Pair, {} and {}", primary.plural(), low.plural())
        }
        (Category::ThreeOfAKind, _) => format!("Three of a Kind, {}", primary.plural()),
        (Category::Straight, _) => format!("Straight, {} high", primary.name()),
        (Category::Flush, _) => format!("Flush, {} high", primary.name()),
        (Category::FullHouse, Some(pair)) => {
            format!("Full House, {} over {}", primary.plural(), pair.plural())
        }
        (Category::FourOfAKind, _) => format!("Four of a Kind, {}", primary.plural()),
        (Category::StraightFlush, _) => format!("Straight Flush, {} high", primary.name()),
        (Category::RoyalFlush, _) => "Royal Flush".to_string(),
        (Category::TwoPair | Category::FullHouse, None) => format!("{:?}", category),
    }
}
