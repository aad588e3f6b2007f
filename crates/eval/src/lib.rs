// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker hand evaluator.
//!
//! Evaluates sets of cards, usually 2 to 7, and finds the best poker hand
//! they contain, its five cards, and a [Score] to rank it against other
//! hands. Heads up showdowns between two holes sharing the same community
//! cards are settled with [compare], hands with equal scores are settled by
//! comparing the hole cards.
//!
//! To evaluate a hand use [evaluate]:
//!
//! ```
//! # use kicker_eval::*;
//! let cards = [(10, 0), (10, 1), (10, 2), (5, 3), (5, 0)]
//!     .into_iter()
//!     .map(|(rank, suit)| Card::from_indices(rank, suit).unwrap())
//!     .collect::<Vec<_>>();
//!
//! let hand = evaluate(&cards);
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//! assert_eq!(hand.score().value(), 61_005);
//! ```
//!
//! and to compare two holes:
//!
//! ```
//! # use kicker_eval::*;
//! let parse = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>().unwrap())
//!         .collect::<Vec<_>>()
//! };
//!
//! let board = parse("2C 7D 9H JS QC");
//! let winner = compare(&parse("QD 3S"), &parse("JD AS"), &board);
//! assert_eq!(winner, Winner::Player);
//! ```
//!
//! All functions are pure and the types are `Send + Sync`, they can be used
//! from many threads without synchronization.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod evaluator;
mod hand;
mod possible;
mod score;
mod showdown;
mod stats;

pub use evaluator::evaluate;
pub use hand::{Classification, EvaluatedHand, HandCategory};
pub use possible::PossibleHands;
pub use score::Score;
pub use showdown::{Showdown, ShowdownResult, TiePolicy, Winner, compare, compare_kickers};
pub use stats::HandStats;

// Reexport cards types.
pub use kicker_cards::{Card, Deck, Rank, Suit};
