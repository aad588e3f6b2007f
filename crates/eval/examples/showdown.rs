// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --example showdown -- --player "AC 5D" --opponent "KH JS" --board "AD KD QD JD TD"
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::error;

use kicker_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The player hole cards, e.g. "AC 5D".
    #[clap(long, short)]
    player: String,
    /// The opponent hole cards.
    #[clap(long, short)]
    opponent: String,
    /// The community cards.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Report perfect ties as ties instead of player wins.
    #[clap(long)]
    split_ties: bool,
}

fn parse_cards(cards: &str) -> Result<Vec<Card>> {
    cards.split_whitespace().map(str::parse).collect()
}

fn run(cli: Cli) -> Result<()> {
    let player = parse_cards(&cli.player)?;
    let opponent = parse_cards(&cli.opponent)?;
    let board = parse_cards(&cli.board)?;

    let mut all = player.iter().chain(&opponent).chain(&board).collect::<Vec<_>>();
    all.sort();
    if all.windows(2).any(|w| w[0] == w[1]) {
        bail!("Duplicate cards in {} {} {}", cli.player, cli.opponent, cli.board);
    }

    let tie_policy = if cli.split_ties {
        TiePolicy::Split
    } else {
        TiePolicy::FavorPlayer
    };

    let result = Showdown::new(tie_policy).resolve(&player, &opponent, &board);
    println!("Player:   {} score {}", result.player, result.player.score());
    println!("Opponent: {} score {}", result.opponent, result.opponent.score());

    let by = if result.by_kicker { " by kicker" } else { "" };
    match result.winner {
        Winner::Player => println!("Player wins{by}"),
        Winner::Opponent => println!("Opponent wins{by}"),
        Winner::Tie => println!("Tie"),
    }

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
    }
}
