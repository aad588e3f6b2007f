// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example category_counts -- --cards 5 --all
// ...
// Total hands      2598960
//
// High Card:       1302540
// Pair:            1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```
use clap::{Parser, value_parser};
use log::info;
use std::time::Instant;

use kicker_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of cards in each hand.
    #[clap(long, short, default_value_t = 7, value_parser = value_parser!(u8).range(2..=7))]
    cards: u8,
    /// Number of sampled hands.
    #[clap(long, short, default_value_t = 1_000_000)]
    samples: usize,
    /// Evaluate all hands instead of sampling.
    #[clap(long)]
    all: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let k = cli.cards as usize;

    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];
    let mut count = |hand: &[Card]| {
        counts[evaluate(hand).category() as usize] += 1;
    };

    if cli.all {
        info!("Evaluating all {k} cards hands");
        Deck::default().for_each(k, &mut count);
    } else {
        info!("Evaluating {} sampled {k} cards hands", cli.samples);
        Deck::default().sample(cli.samples, k, &mut count);
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let name = format!("{category}:");
        println!("{name:<17}{}", counts[category as usize]);
    }
}
