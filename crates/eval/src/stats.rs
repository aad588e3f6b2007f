// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit statistics for a set of cards.
use crate::{Card, Rank, Suit};

/// Ranks mask for the A-2-3-4-5 straight.
const WHEEL_MASK: u16 = 0b1_0000_0000_1111;

/// Ranks mask for five consecutive ranks ending at the deuce.
const RUN_MASK: u16 = 0b1_1111;

/// Rank and suit counts for a set of cards.
///
/// ```
/// # use kicker_eval::*;
/// let cards = ["AS", "AH", "5D", "4C", "3C", "2H"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
///
/// let stats = HandStats::new(&cards);
/// assert_eq!(stats.pairs(), 1);
/// assert_eq!(stats.max_same_rank(), 2);
/// assert_eq!(stats.num_suits(), 4);
/// assert_eq!(stats.high_card(), Some(Rank::Ace));
/// assert_eq!(stats.straight_high(), Some(Rank::Five));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandStats {
    rank_counts: [u8; Rank::COUNT],
    suit_counts: [u8; Suit::COUNT],
    rank_mask: u16,
}

impl HandStats {
    /// Computes the statistics for the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut stats = Self::default();

        for card in cards {
            stats.rank_counts[card.rank().index()] += 1;
            stats.suit_counts[card.suit().index()] += 1;
            stats.rank_mask |= 1 << card.rank().index();
        }

        stats
    }

    /// How many cards have the given rank.
    pub fn rank_count(&self, rank: Rank) -> usize {
        self.rank_counts[rank.index()] as usize
    }

    /// How many cards have the given suit.
    pub fn suit_count(&self, suit: Suit) -> usize {
        self.suit_counts[suit.index()] as usize
    }

    /// The number of different suits.
    pub fn num_suits(&self) -> usize {
        self.suit_counts.iter().filter(|&&c| c > 0).count()
    }

    /// The number of ranks held by two or more cards.
    pub fn pairs(&self) -> usize {
        self.rank_counts.iter().filter(|&&c| c >= 2).count()
    }

    /// The largest number of cards sharing a rank, 0 for no cards.
    pub fn max_same_rank(&self) -> usize {
        self.rank_counts.iter().copied().max().unwrap_or(0) as usize
    }

    /// The highest rank.
    pub fn high_card(&self) -> Option<Rank> {
        Rank::ranks().rev().find(|&r| self.rank_count(r) > 0)
    }

    /// The length of the longest run of consecutive ranks, the ace counts
    /// only as the highest rank.
    pub fn longest_run(&self) -> usize {
        let mut longest = 0;
        let mut current = 0;

        for rank in Rank::ranks() {
            if self.rank_count(rank) > 0 {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }

        longest
    }

    /// Checks if there is a straight in the cards.
    pub fn has_straight(&self) -> bool {
        self.longest_run() >= 5 || self.has_wheel()
    }

    /// The highest rank of the straight in the cards.
    ///
    /// The A-2-3-4-5 straight takes precedence over any other straight, its
    /// highest rank is the five.
    pub fn straight_high(&self) -> Option<Rank> {
        if self.has_wheel() {
            return Some(Rank::Five);
        }

        Rank::ranks()
            .rev()
            .take_while(|&r| r >= Rank::Six)
            .find(|&r| self.has_straight_to(r))
    }

    /// Checks if the cards contain the five consecutive ranks ending at `high`.
    pub fn has_straight_to(&self, high: Rank) -> bool {
        match high {
            Rank::Deuce | Rank::Trey | Rank::Four => false,
            Rank::Five => self.has_wheel(),
            _ => {
                let mask = RUN_MASK << (high.index() - 4);
                self.rank_mask & mask == mask
            }
        }
    }

    /// The first suit, in suit order, with five or more cards.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|&s| self.suit_count(s) >= 5)
    }

    /// The ranks in the cards with their counts sorted by count and then
    /// by rank, both descending.
    pub fn rank_groups(&self) -> Vec<(Rank, usize)> {
        let mut groups = Rank::ranks()
            .map(|r| (r, self.rank_count(r)))
            .filter(|&(_, count)| count > 0)
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        groups
    }

    fn has_wheel(&self) -> bool {
        self.rank_mask & WHEEL_MASK == WHEEL_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(indices: &[(u8, u8)]) -> Vec<Card> {
        indices
            .iter()
            .map(|&(r, s)| Card::from_indices(r, s).unwrap())
            .collect()
    }

    #[test]
    fn stats_empty() {
        let stats = HandStats::new(&[]);
        assert_eq!(stats.max_same_rank(), 0);
        assert_eq!(stats.high_card(), None);
        assert_eq!(stats.pairs(), 0);
        assert_eq!(stats.num_suits(), 0);
        assert_eq!(stats.longest_run(), 0);
        assert!(!stats.has_straight());
        assert!(stats.rank_groups().is_empty());
    }

    #[test]
    fn stats_pair() {
        let stats = HandStats::new(&cards(&[(12, 0), (12, 1), (5, 2), (3, 3), (2, 0)]));
        assert_eq!(stats.max_same_rank(), 2);
        assert_eq!(stats.pairs(), 1);
        assert_eq!(stats.num_suits(), 4);
        assert_eq!(stats.high_card(), Some(Rank::Ace));
        assert_eq!(stats.rank_count(Rank::Ace), 2);
        assert_eq!(stats.suit_count(Suit::Clubs), 2);
        assert!(!stats.has_straight());
        assert_eq!(stats.flush_suit(), None);
    }

    #[test]
    fn stats_straight() {
        let stats = HandStats::new(&cards(&[(8, 0), (9, 1), (10, 2), (11, 3), (7, 0)]));
        assert!(stats.has_straight());
        assert_eq!(stats.longest_run(), 5);
        assert_eq!(stats.straight_high(), Some(Rank::King));

        let stats = HandStats::new(&cards(&[(8, 0), (9, 1), (10, 2), (11, 3), (6, 0)]));
        assert!(!stats.has_straight());
        assert_eq!(stats.longest_run(), 4);
        assert_eq!(stats.straight_high(), None);

        let stats = HandStats::new(&cards(&[(8, 0), (9, 1), (10, 2), (11, 3), (12, 0)]));
        assert!(stats.has_straight());
        assert_eq!(stats.straight_high(), Some(Rank::Ace));
        assert!(stats.has_straight_to(Rank::Ace));
        assert!(!stats.has_straight_to(Rank::King));
    }

    #[test]
    fn stats_straight_picks_highest_run() {
        let stats = HandStats::new(&cards(&[
            (0, 0),
            (1, 1),
            (2, 2),
            (3, 3),
            (4, 0),
            (5, 1),
            (6, 2),
        ]));
        assert_eq!(stats.longest_run(), 7);
        assert_eq!(stats.straight_high(), Some(Rank::Eight));
    }

    #[test]
    fn stats_wheel() {
        let stats = HandStats::new(&cards(&[(12, 0), (0, 1), (1, 2), (2, 3), (3, 0)]));
        assert!(stats.has_straight());
        assert_eq!(stats.longest_run(), 4);
        assert_eq!(stats.straight_high(), Some(Rank::Five));
        assert!(stats.has_straight_to(Rank::Five));

        // The wheel is preferred when another straight shares the ranks.
        let stats = HandStats::new(&cards(&[
            (12, 0),
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 1),
        ]));
        assert_eq!(stats.straight_high(), Some(Rank::Five));
        assert!(stats.has_straight_to(Rank::Six));
    }

    #[test]
    fn stats_flush_suit() {
        let stats = HandStats::new(&cards(&[
            (12, 1),
            (10, 1),
            (8, 1),
            (5, 1),
            (2, 1),
            (7, 0),
        ]));
        assert_eq!(stats.flush_suit(), Some(Suit::Diamonds));
        assert_eq!(stats.num_suits(), 2);
    }

    #[test]
    fn stats_rank_groups() {
        let stats = HandStats::new(&cards(&[
            (5, 3),
            (10, 0),
            (2, 1),
            (10, 1),
            (5, 0),
            (10, 2),
            (12, 0),
        ]));

        let groups = stats.rank_groups();
        assert_eq!(
            groups,
            vec![
                (Rank::Queen, 3),
                (Rank::Seven, 2),
                (Rank::Ace, 1),
                (Rank::Four, 1)
            ]
        );
    }
}
