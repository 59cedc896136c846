// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all -- --cards 7
// ...
// Total hands      133784560
// ```
//
// Three pairs are scored as a full house, so with 6 and 7 cards the two pair
// and full house counts differ from the usual tables.

use clap::Parser;
use std::time::Instant;

use holdem_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of cards in each hand.
    #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
    cards: u8,
}

fn main() {
    let cli = Cli::parse();

    let now = Instant::now();
    let mut counts = [0usize; 11];

    Deck::default().for_each(cli.cards as usize, |hand| {
        if let Ok(hv) = evaluate(&hand[..2], &hand[2..]) {
            counts[hv.category().ordinal() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category.ordinal() as usize]);
    }
}
