// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em table simulation.
//!
//! A [Table] seats players that act using a [Strategy], the [Engine] drives
//! the table through each hand from the deal to the showdown.
//!
//! ```
//! use holdem_game::{Config, Engine, FixedBet, Table};
//!
//! let config = Config { seed: Some(7), ..Config::default() };
//! let players = ["Alice", "Bob", "Carol"]
//!     .into_iter()
//!     .map(|name| config.player(name, FixedBet::default()))
//!     .collect();
//!
//! let mut engine = Engine::new(Table::new(players, &config).unwrap());
//! let summary = engine.run_hand().unwrap();
//! assert!(!summary.showdown.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub use action::{Action, PlayerAction, Street};

pub mod chips;
pub use chips::Chips;

pub mod engine;
pub use engine::{Engine, HandSummary};

pub mod player;
pub use player::Player;

pub mod strategy;
pub use strategy::{ActionRequest, FixedBet, RandomStrategy, Scripted, Strategy};

pub mod table;
pub use table::{Showdown, Table};

pub use holdem_eval as eval;

/// Table configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The chips each player starts with.
    pub chips: Chips,
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
    /// The seed for the table randomness, from the OS if not set.
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a player with the configured starting chips.
    pub fn player<S: Strategy>(&self, name: impl Into<String>, strategy: S) -> Player {
        Player::new(name, self.chips, strategy)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chips: Chips::new(1_000),
            small_blind: Chips::new(1),
            big_blind: Chips::new(2),
            seed: None,
        }
    }
}
