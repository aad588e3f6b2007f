// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A Poker card.
///
/// A card is a rank and a suit, cards are ordered by rank first and then by
/// suit so that sorting in descending order puts the highest card first:
///
/// ```
/// # use kicker_cards::{Card, Rank, Suit};
/// let mut cards = vec![
///     Card::new(Rank::Trey, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Clubs),
///     Card::new(Rank::Ace, Suit::Hearts),
/// ];
/// cards.sort_by(|a, b| b.cmp(a));
/// assert_eq!(cards[0].to_string(), "AH");
/// assert_eq!(cards[2].to_string(), "3S");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Create a card from its integer encoding, rank 0..=12 and suit 0..=3.
    pub fn from_indices(rank: u8, suit: u8) -> Result<Card> {
        let rank = Rank::try_from(rank).map_err(|e| anyhow!("Invalid card: {e}"))?;
        let suit = Suit::try_from(suit).map_err(|e| anyhow!("Invalid card: {e}"))?;
        Ok(Card::new(rank, suit))
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Card::new(Rank::from_char(r)?, Suit::from_char(u)?)),
            _ => bail!("Invalid card {s:?}, expected rank and suit like AH"),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The integer encoding of this rank, 0 for deuce up to 12 for ace.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn from_char(c: char) -> Result<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => bail!("Invalid rank {c:?}"),
        };

        Ok(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        Rank::ranks()
            .nth(value as usize)
            .ok_or_else(|| anyhow!("rank {value} out of range 0..=12"))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
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
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The integer encoding of this suit, 0 for clubs up to 3 for spades.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn from_char(c: char) -> Result<Suit> {
        let suit = match c.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => bail!("Invalid suit {c:?}"),
        };

        Ok(suit)
    }
}

impl TryFrom<u8> for Suit {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        Suit::suits()
            .nth(value as usize)
            .ok_or_else(|| anyhow!("suit {value} out of range 0..=3"))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_indices() {
        for (ridx, rank) in Rank::ranks().enumerate() {
            for (sidx, suit) in Suit::suits().enumerate() {
                let card = Card::from_indices(ridx as u8, sidx as u8).unwrap();
                assert_eq!(card, Card::new(rank, suit));
                assert_eq!(card.rank().index(), ridx);
                assert_eq!(card.suit().index(), sidx);
            }
        }

        assert!(Card::from_indices(13, 0).is_err());
        assert!(Card::from_indices(0, 4).is_err());

        let err = Card::from_indices(20, 1).unwrap_err();
        assert!(err.to_string().contains("rank 20"));
    }

    #[test]
    fn card_ordering() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let ks = Card::new(Rank::King, Suit::Spades);

        assert!(ah > ac);
        assert!(ac > ks);

        let mut cards = vec![ks, ah, ac];
        cards.sort_by(|a, b| b.cmp(a));
        assert_eq!(cards, vec![ah, ac, ks]);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn card_from_string() {
        let c: Card = "KD".parse().unwrap();
        assert_eq!(c, Card::new(Rank::King, Suit::Diamonds));

        let c: Card = "ts".parse().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Spades));

        for card in Rank::ranks().flat_map(|r| Suit::suits().map(move |s| Card::new(r, s))) {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }

        assert!("".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("1H".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
        assert!("AHS".parse::<Card>().is_err());
    }
}
