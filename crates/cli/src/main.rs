// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Holdem command line simulator and hand evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use std::process::ExitCode;

use holdem_game::{
    Chips, Config, Engine, FixedBet, Player, RandomStrategy, Table,
    eval::{evaluate, parse_cards},
};

mod human;

static NICKNAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Frank", "Mike", "Grace", "Heidi", "Ivan", "Judy",
];

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays hands at a simulated table.
    Play(PlayArgs),
    /// Evaluates a hand, the first two cards are the hole cards.
    Eval {
        /// The cards to evaluate, for example: As Kh Qd 9c 7s.
        #[clap(required = true)]
        cards: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    /// Always bets the same amount.
    Fixed,
    /// Folds, checks or bets at random.
    Random,
}

#[derive(Debug, clap::Args)]
struct PlayArgs {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Starting chips for each player.
    #[clap(long, short, default_value_t = 1_000, value_parser = clap::value_parser!(u32).range(1..))]
    chips: u32,
    /// The small blind.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    big_blind: u32,
    /// Number of hands to play.
    #[clap(long, default_value_t = 1)]
    hands: usize,
    /// Seed for a reproducible game.
    #[clap(long)]
    seed: Option<u64>,
    /// The computer players strategy.
    #[clap(long, value_enum, default_value_t = StrategyKind::Random)]
    strategy: StrategyKind,
    /// The amount bet by the fixed strategy.
    #[clap(long, default_value_t = 10)]
    bet: u32,
    /// Take the first seat and play from the terminal.
    #[clap(long)]
    human: bool,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Play(args) => play(args),
        Command::Eval { cards } => eval(&cards),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let config = Config {
        chips: Chips::new(args.chips),
        small_blind: Chips::new(args.small_blind),
        big_blind: Chips::new(args.big_blind),
        seed: args.seed,
    };

    let players = NICKNAMES
        .iter()
        .take(args.players as usize)
        .enumerate()
        .map(|(seat, name)| -> Player {
            if seat == 0 && args.human {
                config.player("You", human::Human::stdin())
            } else {
                match args.strategy {
                    StrategyKind::Fixed => {
                        config.player(*name, FixedBet::new(Chips::new(args.bet)))
                    }
                    StrategyKind::Random => config.player(*name, RandomStrategy::default()),
                }
            }
        })
        .collect();

    let mut engine = Engine::new(Table::new(players, &config)?);
    let summaries = engine.run(args.hands)?;

    info!("Played {} hands", summaries.len());
    for player in engine.table().players() {
        info!("{:<8} {:>10}", player.name, player.chips.to_string());
    }

    Ok(())
}

fn eval(args: &[String]) -> Result<()> {
    let cards = parse_cards(&args.join(" "))?;
    if cards.len() > 7 {
        bail!("Expected 5 to 7 cards, got {}", cards.len());
    }

    let (hole, board) = cards.split_at(cards.len().min(2));
    let hv = evaluate(hole, board)?;

    println!("Category: {}", hv.category());
    let ranks = hv.ranks().iter().map(|r| r.to_string()).collect::<Vec<_>>();
    println!("Ranks:    {}", ranks.join(" "));
    println!("Score:    {}", hv.score());

    Ok(())
}
