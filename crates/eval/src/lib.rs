// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Holdem hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator looks at all
//! the cards in the pool, finds the best five cards hand, and returns a
//! [HandEvaluation] with the hand category and the ranks that break ties
//! between hands of the same category.
//!
//! To use the evaluator pass the hole cards and the board to [evaluate] and
//! compare the results:
//!
//! ```
//! # use holdem_eval::*;
//! let board = parse_cards("Qd 9c 7s 3h 2d").unwrap();
//! let v1 = evaluate(&parse_cards("As Kh").unwrap(), &board).unwrap();
//! let v2 = evaluate(&parse_cards("9s 9h").unwrap(), &board).unwrap();
//! assert_eq!(v1.category(), HandCategory::HighCard);
//! assert_eq!(v2.category(), HandCategory::ThreeOfAKind);
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, HandEvaluation, evaluate};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
