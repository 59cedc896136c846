// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Holdem cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(ah.to_string(), "A♥");
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, sampling, and iterating cards in
//! the deck. All randomness comes from a generator passed by the caller so that
//! a seeded generator gives reproducible deals.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use holdem_cards::Deck;
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
//! # use holdem_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut counter = 0;
//! Deck::default().sample(&mut rng, 10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
