use serde::{Deserialize, Serialize};

/// A slice of the pot together with the seats that can win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    pub eligible: Vec<usize>,
}

/// Splits per-seat hand contributions into a main pot and side pots.
///
/// Each layer is capped at the smallest remaining contribution of a live
/// seat, so a short all-in stack can only win what it matched from every
/// opponent. A layer with a single eligible seat is an uncalled bet and goes
/// straight back to that seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    /// Pots for seats that are all still live.
    pub fn from_contributions(contributions: &[u32]) -> Self {
        Self::with_folded(contributions, &vec![false; contributions.len()])
    }

    /// Folded seats feed the pots but are never eligible to win them.
    pub fn with_folded(contributions: &[u32], folded: &[bool]) -> Self {
        let mut levels: Vec<u32> = contributions
            .iter()
            .zip(folded)
            .filter(|(c, f)| **c > 0 && !**f)
            .map(|(c, _)| *c)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots: Vec<Pot> = Vec::new();
        let mut floor = 0u32;
        for &level in &levels {
            let amount: u32 = contributions
                .iter()
                .map(|&c| c.min(level).saturating_sub(floor))
                .sum();
            let eligible: Vec<usize> = contributions
                .iter()
                .zip(folded)
                .enumerate()
                .filter(|(_, (c, f))| !**f && **c >= level)
                .map(|(seat, _)| seat)
                .collect();
            if amount > 0 {
                pots.push(Pot { amount, eligible });
            }
            floor = level;
        }

        // Chips folded seats put in above the top live level.
        let dead: u32 = contributions
            .iter()
            .map(|&c| c.saturating_sub(floor))
            .sum();
        if dead > 0 {
            match pots.last_mut() {
                Some(top) => top.amount += dead,
                None => pots.push(Pot {
                    amount: dead,
                    eligible: Vec::new(),
                }),
            }
        }

        Self { pots }
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map_or(0, |p| p.amount)
    }

    pub fn side_pots(&self) -> Vec<u32> {
        self.pots.iter().skip(1).map(|p| p.amount).collect()
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.amount).sum()
    }
}
