// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards for enumerating and sampling hands.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Indices of the current k-subset in lexicographic order.
        let n = self.cards.len();
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&p| idx[p] < n - k + p) else {
                break;
            };

            idx[pos] += 1;
            for p in (pos + 1)..k {
                idx[p] = idx[p - 1] + 1;
            }

            for p in pos..k {
                hand[p] = self.cards[idx[p]];
            }
        }
    }

    /// Calls the `f` closure with `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<F>(&self, samples: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut rng = rand::rng();
        let mut hand = Vec::with_capacity(k);

        for _ in 0..samples {
            hand.clear();
            hand.extend(self.cards.choose_multiple(&mut rng, k).copied());
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_deal() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert!(cards.iter().all(|c| c.suit() != Suit::Diamonds || c.rank() < Rank::King));
            count += 1;
        });
        assert_eq!(count, 230_300);
    }

    #[test]
    fn deck_for_each_small() {
        let mut deck = Deck::default();
        for card in Deck::default().into_iter().skip(3) {
            deck.remove(card);
        }

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(3, |_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();

        let mut count = 0;
        deck.sample(100, 7, |cards| {
            assert_eq!(cards.len(), 7);
            let unique = cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
    }
}
