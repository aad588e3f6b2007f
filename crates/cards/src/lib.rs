// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker cards types.
//!
//! This crate define types to create cards, either from a rank and a suit or
//! from their integer encoding (rank 0..=12 for deuce..ace, suit 0..=3):
//!
//! ```
//! # use kicker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(Card::from_indices(12, 2).unwrap(), ah);
//! assert_eq!("AH".parse::<Card>().unwrap(), ah);
//! assert!(Card::from_indices(13, 0).is_err());
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use kicker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 7-cards hands:
//!
//! ```
//! # use kicker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;

pub use cards::{Card, Rank, Suit};
pub use deck::Deck;
