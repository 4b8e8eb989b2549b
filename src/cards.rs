use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of cards in the standard deck.
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("card token '{0}' must be exactly two characters")]
    InvalidToken(String),
    #[error("invalid rank '{0}'")]
    InvalidRank(char),
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    fn from_letter(c: char) -> Result<Self, CardError> {
        match c {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2 through 14 (ace high).
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn letter(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_letter(c: char) -> Result<Self, CardError> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.letter() == c)
            .ok_or(CardError::InvalidRank(c))
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    /// Pretty form with a suit glyph, e.g. `A♥`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.rank.letter(), self.suit.symbol())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.letter(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a two-character token: rank from `23456789TJQKA`, suit from `CDHS`.
    /// Only upper-case letters are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_letter(rank)?, Suit::from_letter(suit)?))
            }
            _ => Err(CardError::InvalidToken(s.to_string())),
        }
    }
}

pub fn parse_card(token: &str) -> Result<Card, CardError> {
    token.parse()
}

/// All 52 cards, suit-major, ranks ascending within each suit.
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// The deck minus every card in `known`, in deck order.
pub fn unknown_cards(known: &[Card]) -> Vec<Card> {
    standard_deck()
        .into_iter()
        .filter(|card| !known.contains(card))
        .collect()
}

/// Fails on the first card that appears twice in `cards`.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), CardError> {
    for (idx, card) in cards.iter().enumerate() {
        if cards[idx + 1..].contains(card) {
            return Err(CardError::DuplicateCard(*card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_face_cards_and_suits() {
        let card: Card = "TH".parse().unwrap();
        assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(card.rank_value(), 10);
        assert_eq!(parse_card("AS").unwrap().rank_value(), 14);
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(parse_card("1H"), Err(CardError::InvalidRank('1')));
        assert_eq!(parse_card("AX"), Err(CardError::InvalidSuit('X')));
        assert!(matches!(parse_card("10H"), Err(CardError::InvalidToken(_))));
        assert!(matches!(parse_card(""), Err(CardError::InvalidToken(_))));
    }

    #[test]
    fn lower_case_and_padding_are_rejected() {
        assert_eq!(parse_card("ah"), Err(CardError::InvalidRank('a')));
        assert_eq!(parse_card("Ah"), Err(CardError::InvalidSuit('h')));
        assert_eq!(parse_card(" A"), Err(CardError::InvalidRank(' ')));
        assert!(matches!(parse_card(" AH"), Err(CardError::InvalidToken(_))));
    }

    #[test]
    fn display_is_canonical_token() {
        let card = Card::new(Rank::Queen, Suit::Diamonds);
        assert_eq!(card.to_string(), "QD");
        assert_eq!(card.notation(), "Q♦");
    }
}
