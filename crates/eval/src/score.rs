// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scores.
//!
//! A score packs a hand category and its defining ranks into an integer so
//! that hands can be compared with a single integer comparison:
//!
//! ```text
//!   Royal Flush      90000
//!   Straight Flush   80000 + high rank
//!   Four of a Kind   70000 + quads rank
//!   Full House       60000 + 100 * trips rank + pair rank
//!   Flush            50000 + high rank
//!   Straight         40000 + high rank
//!   Three of a Kind  30000 + trips rank
//!   Two Pair         20000 + 100 * high pair rank + low pair rank
//!   Pair             10000 + pair rank
//!   High Card        high rank
//! ```
//!
//! Ranks go from 0 (deuce) to 12 (ace), the A-2-3-4-5 straight high rank is
//! the five so it scores 40003 (80003 if suited), below any other straight.
//! Hands with equal scores are only separated by kickers.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Classification, HandCategory, Rank};

/// A hand score, higher is better.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Score(u32);

impl Score {
    /// The best possible score.
    pub const ROYAL_FLUSH: Score = Score(90_000);

    /// Computes the score for a classified hand.
    pub fn of(class: &Classification) -> Score {
        let r = |rank: Rank| rank.index() as u32;

        let value = match *class {
            Classification::HighCard(high) => high.map(r).unwrap_or(0),
            Classification::Pair(pair) => r(pair),
            Classification::TwoPair(high, low) => 100 * r(high) + r(low),
            Classification::ThreeOfAKind(trips) => r(trips),
            Classification::Straight(high) => r(high),
            Classification::Flush(high) => r(high),
            Classification::FullHouse(trips, pair) => 100 * r(trips) + r(pair),
            Classification::FourOfAKind(quads) => r(quads),
            Classification::StraightFlush(high) => r(high),
            Classification::RoyalFlush => 0,
        };

        Score(Self::base(class.category()) + value)
    }

    /// The integer value.
    pub fn value(&self) -> u32 {
        self.0
    }

    fn base(category: HandCategory) -> u32 {
        category as u32 * 10_000
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
