// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator checks the categories from the strongest to the weakest and
//! stops at the first match:
//!
//! 1. flushes, including straight and royal flushes within the flush suit,
//! 2. straights, with the A-2-3-4-5 straight as the lowest straight,
//! 3. rank groups: quads, full house, trips, two pair, pair and high card.
//!
//! For up to seven cards this order gives the best hand as a flush or a
//! straight cannot be made together with a full house or quads.
use crate::{Card, Classification, EvaluatedHand, HandStats, Rank};

/// The number of cards in a complete poker hand.
pub(crate) const HAND_SIZE: usize = 5;

/// Result of a single category check.
type Check = Option<(Classification, Vec<Card>)>;

/// Evaluates a set of cards and returns the best hand.
///
/// Any number of cards is accepted, with fewer than five cards flushes and
/// straights are not possible and the hand has fewer than five cards. An
/// empty set is a high card hand with no cards and a zero score.
///
/// ```
/// # use kicker_eval::*;
/// let cards = ["AH", "KH", "QH", "JH", "TH", "5C", "2S"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
///
/// let hand = evaluate(&cards);
/// assert_eq!(hand.category(), HandCategory::RoyalFlush);
/// assert_eq!(hand.score().value(), 90_000);
/// assert_eq!(hand.to_string(), "Royal Flush [AH KH QH JH TH]");
/// ```
pub fn evaluate(cards: &[Card]) -> EvaluatedHand {
    let sorted = sorted_desc(cards);
    let stats = HandStats::new(&sorted);

    let (class, best) = check_flush(&sorted, &stats)
        .or_else(|| check_straight(&sorted, &stats))
        .unwrap_or_else(|| check_rank_groups(&sorted, &stats));

    EvaluatedHand::new(class, best)
}

fn check_flush(sorted: &[Card], stats: &HandStats) -> Check {
    let suited = suited_cards(sorted, stats)?;

    let suited_stats = HandStats::new(&suited);
    if suited_stats.has_straight_to(Rank::Ace) {
        return Some((Classification::RoyalFlush, straight_cards(&suited, Rank::Ace)));
    }

    let check = match suited_stats.straight_high() {
        Some(high) => (
            Classification::StraightFlush(high),
            straight_cards(&suited, high),
        ),
        None => (
            Classification::Flush(suited[0].rank()),
            suited.into_iter().take(HAND_SIZE).collect(),
        ),
    };

    Some(check)
}

fn check_straight(sorted: &[Card], stats: &HandStats) -> Check {
    let high = stats.straight_high()?;
    Some((Classification::Straight(high), straight_cards(sorted, high)))
}

fn check_rank_groups(sorted: &[Card], stats: &HandStats) -> (Classification, Vec<Card>) {
    let groups = stats.rank_groups();

    let Some(&(top, top_count)) = groups.first() else {
        return (Classification::HighCard(None), Vec::new());
    };

    // Best pair rank after the top group, this can be the rank of a second
    // set of trips.
    let second_pair = groups[1..]
        .iter()
        .filter(|&&(_, count)| count >= 2)
        .map(|&(rank, _)| rank)
        .max();

    let (class, parts) = match (top_count, second_pair) {
        (n, _) if n >= 4 => (Classification::FourOfAKind(top), vec![(top, 4)]),
        (3, Some(pair)) => (
            Classification::FullHouse(top, pair),
            vec![(top, 3), (pair, 2)],
        ),
        (3, None) => (Classification::ThreeOfAKind(top), vec![(top, 3)]),
        (2, Some(low)) => (Classification::TwoPair(top, low), vec![(top, 2), (low, 2)]),
        (2, None) => (Classification::Pair(top), vec![(top, 2)]),
        _ => (Classification::HighCard(Some(top)), vec![]),
    };

    (class, group_cards(sorted, &parts))
}

/// Sorts cards by rank and suit descending.
pub(crate) fn sorted_desc(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

/// All the cards of the flush suit, None if there is no flush.
pub(crate) fn suited_cards(sorted: &[Card], stats: &HandStats) -> Option<Vec<Card>> {
    let suit = stats.flush_suit()?;
    Some(sorted.iter().filter(|c| c.suit() == suit).copied().collect())
}

/// Picks one card for each rank of the straight ending at `high`.
///
/// The cards must be sorted and contain the straight, for each rank the
/// first card with that rank is picked. The cards are returned from the
/// highest rank to the lowest, with the ace last for the A-2-3-4-5 straight.
pub(crate) fn straight_cards(sorted: &[Card], high: Rank) -> Vec<Card> {
    let high = high.index();

    (0..HAND_SIZE)
        .map(|offset| (high + Rank::COUNT - offset) % Rank::COUNT)
        .filter_map(|rank| sorted.iter().find(|c| c.rank().index() == rank).copied())
        .collect()
}

/// Takes `count` cards for each (rank, count) part and fills the hand with
/// the highest remaining cards.
pub(crate) fn group_cards(sorted: &[Card], parts: &[(Rank, usize)]) -> Vec<Card> {
    let mut best = Vec::with_capacity(HAND_SIZE);

    for &(rank, count) in parts {
        best.extend(sorted.iter().filter(|c| c.rank() == rank).take(count));
    }

    let kickers = sorted
        .iter()
        .filter(|c| !parts.iter().any(|&(rank, _)| c.rank() == rank))
        .take(HAND_SIZE.saturating_sub(best.len()))
        .copied()
        .collect::<Vec<_>>();

    best.extend(kickers);
    best.truncate(HAND_SIZE);
    best
}
