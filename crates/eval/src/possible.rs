// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! All the hand categories contained in a set of cards.
use crate::{
    Card, HandCategory, HandStats, Rank,
    evaluator::{HAND_SIZE, group_cards, sorted_desc, straight_cards, suited_cards},
};

/// The categories a set of cards contains and the cards that make each one.
///
/// A full house contains three of a kind, two pair and a pair, a straight
/// flush contains a straight and a flush, and so on:
///
/// ```
/// # use kicker_eval::*;
/// let cards = ["QC", "QD", "QH", "8S", "8C"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
///
/// let possible = PossibleHands::new(&cards);
/// assert!(possible.contains(HandCategory::TwoPair));
/// assert!(!possible.contains(HandCategory::FourOfAKind));
/// assert_eq!(possible.best(), Some(HandCategory::FullHouse));
/// assert_eq!(possible.get(HandCategory::ThreeOfAKind).unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PossibleHands {
    hands: [Option<Vec<Card>>; HandCategory::COUNT],
}

impl PossibleHands {
    /// Finds all the categories in the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let sorted = sorted_desc(cards);
        let stats = HandStats::new(&sorted);
        let mut possible = Self::default();

        if !sorted.is_empty() {
            possible.set(
                HandCategory::HighCard,
                sorted.iter().take(HAND_SIZE).copied().collect(),
            );
        }

        // Ranks held at least 2, 3 and 4 times, from the highest rank.
        let held = |n: usize| {
            Rank::ranks()
                .rev()
                .filter(|&r| stats.rank_count(r) >= n)
                .collect::<Vec<_>>()
        };
        let (pairs, trips, quads) = (held(2), held(3), held(4));

        if let Some(&pair) = pairs.first() {
            possible.set(HandCategory::Pair, group_cards(&sorted, &[(pair, 2)]));
            possible.trim(HandCategory::Pair, 2);
        }

        if let [high, low, ..] = pairs.as_slice() {
            possible.set(
                HandCategory::TwoPair,
                group_cards(&sorted, &[(*high, 2), (*low, 2)]),
            );
            possible.trim(HandCategory::TwoPair, 4);
        }

        if let Some(&trip) = trips.first() {
            possible.set(HandCategory::ThreeOfAKind, group_cards(&sorted, &[(trip, 3)]));
            possible.trim(HandCategory::ThreeOfAKind, 3);

            if let Some(&pair) = pairs.iter().find(|&&r| r != trip) {
                possible.set(
                    HandCategory::FullHouse,
                    group_cards(&sorted, &[(trip, 3), (pair, 2)]),
                );
            }
        }

        if let Some(&quad) = quads.first() {
            possible.set(HandCategory::FourOfAKind, group_cards(&sorted, &[(quad, 4)]));
            possible.trim(HandCategory::FourOfAKind, 4);
        }

        if let Some(high) = stats.straight_high() {
            possible.set(HandCategory::Straight, straight_cards(&sorted, high));
        }

        if let Some(suited) = suited_cards(&sorted, &stats) {
            possible.set(
                HandCategory::Flush,
                suited.iter().take(HAND_SIZE).copied().collect(),
            );

            let suited_stats = HandStats::new(&suited);
            if let Some(high) = suited_stats.straight_high() {
                possible.set(HandCategory::StraightFlush, straight_cards(&suited, high));
            }

            if suited_stats.has_straight_to(Rank::Ace) {
                possible.set(HandCategory::RoyalFlush, straight_cards(&suited, Rank::Ace));
            }
        }

        possible
    }

    /// The cards making the given category, None if the category is not present.
    pub fn get(&self, category: HandCategory) -> Option<&[Card]> {
        self.hands[category as usize].as_deref()
    }

    /// Checks if the cards contain the given category.
    pub fn contains(&self, category: HandCategory) -> bool {
        self.hands[category as usize].is_some()
    }

    /// The strongest category, None if there are no cards.
    pub fn best(&self) -> Option<HandCategory> {
        self.iter().last().map(|(category, _)| category)
    }

    /// Iterates the present categories from the weakest to the strongest.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, &[Card])> + '_ {
        HandCategory::categories().filter_map(|c| self.get(c).map(|cards| (c, cards)))
    }

    fn set(&mut self, category: HandCategory, cards: Vec<Card>) {
        self.hands[category as usize] = Some(cards);
    }

    // Keeps only the cards of the rank groups, without kickers.
    fn trim(&mut self, category: HandCategory, len: usize) {
        if let Some(cards) = self.hands[category as usize].as_mut() {
            cards.truncate(len);
        }
    }
}
