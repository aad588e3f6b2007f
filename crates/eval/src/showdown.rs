// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads up showdown between a player and an opponent.
//!
//! Each hole is evaluated with the community cards and the higher score wins,
//! when the scores are equal the hole cards are compared card by card from
//! the highest, with cards ordered by rank and then by suit.
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{Card, EvaluatedHand, evaluate, evaluator::sorted_desc};

/// The showdown winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The player wins.
    Player,
    /// The opponent wins.
    Opponent,
    /// Nobody wins.
    Tie,
}

/// How to settle a showdown where both the scores and the hole cards tie.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TiePolicy {
    /// The player wins the tie.
    #[default]
    FavorPlayer,
    /// The tie is reported as a [Winner::Tie].
    Split,
}

/// The outcome of a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    /// The player best hand.
    pub player: EvaluatedHand,
    /// The opponent best hand.
    pub opponent: EvaluatedHand,
    /// Who won the showdown.
    pub winner: Winner,
    /// Set if the scores were equal and the hole cards settled the showdown.
    pub by_kicker: bool,
}

/// Compares two hands at showdown.
///
/// ```
/// # use kicker_eval::*;
/// let parse = |s: &str| {
///     s.split_whitespace()
///         .map(|c| c.parse::<Card>().unwrap())
///         .collect::<Vec<_>>()
/// };
///
/// // The board is a royal flush, the ace kicker wins.
/// let board = parse("AD KD QD JD TD");
/// let showdown = Showdown::default();
/// let result = showdown.resolve(&parse("AC 5D"), &parse("KH JS"), &board);
/// assert_eq!(result.winner, Winner::Player);
/// assert!(result.by_kicker);
///
/// // With a split tie policy the same holes tie.
/// let showdown = Showdown::new(TiePolicy::Split);
/// let winner = showdown.compare(&parse("AC 5D"), &parse("AC 5D"), &board);
/// assert_eq!(winner, Winner::Tie);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    /// The policy for perfect ties.
    pub tie_policy: TiePolicy,
}

impl Showdown {
    /// Creates a showdown with the given tie policy.
    pub fn new(tie_policy: TiePolicy) -> Self {
        Self { tie_policy }
    }

    /// Evaluates both hands and finds the winner.
    pub fn resolve(
        &self,
        player_hole: &[Card],
        opponent_hole: &[Card],
        community: &[Card],
    ) -> ShowdownResult {
        let player = evaluate(&with_community(player_hole, community));
        let opponent = evaluate(&with_community(opponent_hole, community));

        let (winner, by_kicker) = match player.score().cmp(&opponent.score()) {
            Ordering::Greater => (Winner::Player, false),
            Ordering::Less => (Winner::Opponent, false),
            Ordering::Equal => match compare_kickers(player_hole, opponent_hole) {
                Ordering::Greater => (Winner::Player, true),
                Ordering::Less => (Winner::Opponent, true),
                Ordering::Equal => {
                    trace!("Kickers tie {player_hole:?} {opponent_hole:?}");
                    let winner = match self.tie_policy {
                        TiePolicy::FavorPlayer => Winner::Player,
                        TiePolicy::Split => Winner::Tie,
                    };
                    (winner, true)
                }
            },
        };

        debug!(
            "Showdown player {} ({}) opponent {} ({}) winner {winner:?} by_kicker {by_kicker}",
            player,
            player.score(),
            opponent,
            opponent.score(),
        );

        ShowdownResult {
            player,
            opponent,
            winner,
            by_kicker,
        }
    }

    /// Evaluates both hands and returns the winner.
    pub fn compare(
        &self,
        player_hole: &[Card],
        opponent_hole: &[Card],
        community: &[Card],
    ) -> Winner {
        self.resolve(player_hole, opponent_hole, community).winner
    }
}

/// Returns the showdown winner using the default [Showdown].
pub fn compare(player_hole: &[Card], opponent_hole: &[Card], community: &[Card]) -> Winner {
    Showdown::default().compare(player_hole, opponent_hole, community)
}

/// Compares two holes card by card from the highest card.
///
/// The first pair of cards that differ decides the order, if one hole has
/// more cards only the cards in both holes are compared.
pub fn compare_kickers(player_hole: &[Card], opponent_hole: &[Card]) -> Ordering {
    let player = sorted_desc(player_hole);
    let opponent = sorted_desc(opponent_hole);

    player
        .iter()
        .zip(&opponent)
        .map(|(p, o)| p.cmp(o))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn with_community(hole: &[Card], community: &[Card]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(hole.len() + community.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);
    cards
}
