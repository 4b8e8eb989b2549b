//! Three-card hand classification.
//!
//! Category order is specific to this variant: a flush ranks *below* a straight.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    Flush = 2,
    Straight = 3,
    ThreeOfAKind = 4,
    StraightFlush = 5,
}

impl HandCategory {
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::Flush => "flush",
            HandCategory::Straight => "straight",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::StraightFlush => "straight flush",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    pub fn flipped(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Tie => Outcome::Tie,
            Outcome::Loss => Outcome::Win,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Tie,
            Ordering::Less => Outcome::Loss,
        }
    }
}

/// Two hole cards plus the shared table card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 3],
}

impl Hand {
    pub fn new(hole: [Card; 2], table: Card) -> Self {
        Self {
            cards: [hole[0], hole[1], table],
        }
    }

    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    /// Rank values in hole-then-table order.
    pub fn rank_values(&self) -> [u8; 3] {
        self.cards.map(|card| card.rank_value())
    }

    pub fn category(&self) -> HandCategory {
        let values = self.rank_values();
        let flush = self.cards.iter().all(|card| card.suit == self.cards[0].suit);
        let straight = straight_high(values).is_some();

        if straight && flush {
            HandCategory::StraightFlush
        } else if values[0] == values[1] && values[1] == values[2] {
            HandCategory::ThreeOfAKind
        } else if straight {
            HandCategory::Straight
        } else if flush {
            HandCategory::Flush
        } else if values[0] == values[1] || values[1] == values[2] || values[0] == values[2] {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        }
    }

    pub fn strength(&self) -> HandStrength {
        let category = self.category();
        HandStrength {
            category,
            key: tie_break_key(category, self.rank_values()),
        }
    }
}

pub fn classify(hole: [Card; 2], table: Card) -> HandCategory {
    Hand::new(hole, table).category()
}

/// Category plus the tie-break key; ordering is category first, then key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: HandCategory,
    pub key: [u8; 3],
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// High card of a three-card straight. The wheel A-2-3 plays as 3-high.
pub fn straight_high(values: [u8; 3]) -> Option<u8> {
    let mut sorted = values;
    sorted.sort_unstable();
    if sorted[0] + 1 == sorted[1] && sorted[1] + 1 == sorted[2] {
        return Some(sorted[2]);
    }
    if sorted == [Rank::Two.value(), Rank::Three.value(), Rank::Ace.value()] {
        return Some(Rank::Three.value());
    }
    None
}

/// Comparable key for hands of the same category, most significant value first.
pub fn tie_break_key(category: HandCategory, values: [u8; 3]) -> [u8; 3] {
    match category {
        HandCategory::ThreeOfAKind => [values[0], 0, 0],
        HandCategory::Pair => {
            let (pair, kicker) = if values[0] == values[1] {
                (values[0], values[2])
            } else if values[1] == values[2] {
                (values[1], values[0])
            } else {
                (values[0], values[1])
            };
            [pair, kicker, 0]
        }
        HandCategory::Straight | HandCategory::StraightFlush => {
            [straight_high(values).unwrap_or(0), 0, 0]
        }
        HandCategory::Flush | HandCategory::HighCard => {
            let mut sorted = values;
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            sorted
        }
    }
}

/// Compares two hands already known to share `category`.
pub fn compare_tie_break(category: HandCategory, ours: [u8; 3], theirs: [u8; 3]) -> Outcome {
    tie_break_key(category, ours)
        .cmp(&tie_break_key(category, theirs))
        .into()
}

pub fn showdown(ours: &Hand, theirs: &Hand) -> Outcome {
    ours.strength().cmp(&theirs.strength()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_card;

    fn hand(tokens: [&str; 3]) -> Hand {
        let [a, b, c] = tokens.map(|t| parse_card(t).unwrap());
        Hand::new([a, b], c)
    }

    #[test]
    fn wheel_is_three_high() {
        assert_eq!(straight_high([14, 2, 3]), Some(3));
        assert_eq!(straight_high([12, 13, 14]), Some(14));
        assert_eq!(straight_high([13, 14, 2]), None);
    }

    #[test]
    fn flush_ranks_below_straight() {
        let flush = hand(["2H", "7H", "KH"]);
        let straight = hand(["5C", "6D", "7S"]);
        assert_eq!(flush.category(), HandCategory::Flush);
        assert_eq!(straight.category(), HandCategory::Straight);
        assert_eq!(showdown(&straight, &flush), Outcome::Win);
    }

    #[test]
    fn pair_key_finds_pair_in_any_position() {
        assert_eq!(tie_break_key(HandCategory::Pair, [9, 4, 9]), [9, 4, 0]);
        assert_eq!(tie_break_key(HandCategory::Pair, [4, 9, 9]), [9, 4, 0]);
        assert_eq!(tie_break_key(HandCategory::Pair, [9, 9, 4]), [9, 4, 0]);
    }
}
