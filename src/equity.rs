use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardError, ensure_distinct, unknown_cards};
use crate::hand::{Hand, Outcome, compare_tie_break};

/// Opponent holdings possible once three cards are known: C(49, 2).
pub const OPPONENT_COMBINATIONS: u32 = 1176;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquityTally {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
}

impl EquityTally {
    pub fn total(&self) -> u32 {
        self.wins + self.ties + self.losses
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    /// Wins plus half of ties, over every holding evaluated.
    pub fn win_probability(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some((self.wins as f64 + 0.5 * self.ties as f64) / total as f64)
    }
}

/// Scores our hand against every two-card holding left in the deck.
///
/// This is an exact enumeration, not a sample: the same cards always give the same tally.
pub fn exhaustive_equity(hole: [Card; 2], table: Card) -> Result<EquityTally, CardError> {
    let known = [hole[0], hole[1], table];
    ensure_distinct(&known)?;

    let ours = Hand::new(hole, table);
    let our_category = ours.category();
    let our_values = ours.rank_values();

    let mut tally = EquityTally::default();
    for (first, second) in unknown_cards(&known).into_iter().tuple_combinations() {
        let theirs = Hand::new([first, second], table);
        let their_category = theirs.category();
        let outcome = if our_category == their_category {
            compare_tie_break(our_category, our_values, theirs.rank_values())
        } else {
            our_category.cmp(&their_category).into()
        };
        tally.record(outcome);
    }
    Ok(tally)
}

pub fn estimate_equity(hole: [Card; 2], table: Card) -> Result<f64, CardError> {
    Ok(exhaustive_equity(hole, table)?
        .win_probability()
        .unwrap_or(0.5))
}
