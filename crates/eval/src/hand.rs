// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and evaluated hands.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Rank, Score};

/// The hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs, straights or flushes.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// Ten to ace straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// A classified hand with the ranks that define it.
///
/// Straights carry their highest rank, the A-2-3-4-5 straight has
/// [Rank::Five] as its highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Highest card, None for a hand with no cards.
    HighCard(Option<Rank>),
    /// The pair rank.
    Pair(Rank),
    /// The high and low pair ranks.
    TwoPair(Rank, Rank),
    /// The trips rank.
    ThreeOfAKind(Rank),
    /// The straight highest rank.
    Straight(Rank),
    /// The flush highest rank.
    Flush(Rank),
    /// The trips and pair ranks.
    FullHouse(Rank, Rank),
    /// The quads rank.
    FourOfAKind(Rank),
    /// The straight flush highest rank.
    StraightFlush(Rank),
    /// Ten to ace straight flush.
    RoyalFlush,
}

impl Classification {
    /// The category for this classification.
    pub fn category(&self) -> HandCategory {
        match self {
            Classification::HighCard(_) => HandCategory::HighCard,
            Classification::Pair(_) => HandCategory::Pair,
            Classification::TwoPair(..) => HandCategory::TwoPair,
            Classification::ThreeOfAKind(_) => HandCategory::ThreeOfAKind,
            Classification::Straight(_) => HandCategory::Straight,
            Classification::Flush(_) => HandCategory::Flush,
            Classification::FullHouse(..) => HandCategory::FullHouse,
            Classification::FourOfAKind(_) => HandCategory::FourOfAKind,
            Classification::StraightFlush(_) => HandCategory::StraightFlush,
            Classification::RoyalFlush => HandCategory::RoyalFlush,
        }
    }

    /// The score for this classification.
    pub fn score(&self) -> Score {
        Score::of(self)
    }
}

/// The result of a hand evaluation.
///
/// It holds the hand classification and the cards that make the hand, the
/// cards are at most five and are fewer only when the evaluated hand had
/// fewer than five cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    classification: Classification,
    cards: Vec<Card>,
}

impl EvaluatedHand {
    pub(crate) fn new(classification: Classification, cards: Vec<Card>) -> Self {
        debug_assert!(cards.len() <= 5);
        Self {
            classification,
            cards,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.classification.category()
    }

    /// The hand classification with its defining ranks.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// The hand score, a higher score is a stronger hand.
    pub fn score(&self) -> Score {
        self.classification.score()
    }

    /// The cards that make this hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category())?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn categories_order() {
        let categories = HandCategory::categories().collect::<Vec<_>>();
        assert_eq!(categories.len(), HandCategory::COUNT);
        assert!(categories.windows(2).all(|w| w[0] < w[1]));

        for (idx, c) in categories.iter().enumerate() {
            assert_eq!(*c as usize, idx);
        }
    }

    #[test]
    fn classification_category() {
        use Rank::*;

        let classes = [
            Classification::HighCard(None),
            Classification::Pair(Ace),
            Classification::TwoPair(Ace, King),
            Classification::ThreeOfAKind(Deuce),
            Classification::Straight(Five),
            Classification::Flush(Nine),
            Classification::FullHouse(Ten, Five),
            Classification::FourOfAKind(Trey),
            Classification::StraightFlush(King),
            Classification::RoyalFlush,
        ];

        for (class, category) in classes.iter().zip(HandCategory::categories()) {
            assert_eq!(class.category(), category);
        }
    }

    #[test]
    fn hand_to_string() {
        let hand = EvaluatedHand::new(
            Classification::Pair(Rank::Ace),
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Nine, Suit::Clubs),
            ],
        );
        assert_eq!(hand.to_string(), "Pair [AS AH 9C]");

        let hand = EvaluatedHand::new(Classification::HighCard(None), vec![]);
        assert_eq!(hand.to_string(), "High Card []");
    }
}
