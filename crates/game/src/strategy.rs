// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Player strategies.
//!
//! A [Strategy] decides what a player does when the table asks for an action.
//! Randomness is passed in by the table so that a seeded table replays the same
//! decisions.
use rand::{Rng, RngCore};
use std::collections::VecDeque;

use holdem_cards::Card;

use crate::{Chips, PlayerAction, Street};

/// The state a player sees when asked to act.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    /// The current street.
    pub street: Street,
    /// The board cards.
    pub board: Vec<Card>,
    /// The player hole cards.
    pub hole_cards: Option<[Card; 2]>,
    /// The player chips.
    pub chips: Chips,
    /// The chips in the pot.
    pub pot: Chips,
    /// The table big blind.
    pub big_blind: Chips,
}

impl ActionRequest {
    /// Checks if the player has chips to bet.
    pub fn can_bet(&self) -> bool {
        self.chips > Chips::ZERO
    }
}

/// A Poker player strategy.
pub trait Strategy: Send + 'static {
    /// Returns an action and the amount for bets given the request.
    fn execute(&mut self, req: &ActionRequest, rng: &mut dyn RngCore) -> (PlayerAction, Chips);
}

/// Bets the same amount on every street, checks when short of chips.
#[derive(Debug, Clone)]
pub struct FixedBet {
    amount: Chips,
}

impl FixedBet {
    /// Creates a strategy that bets `amount`.
    pub fn new(amount: Chips) -> Self {
        Self { amount }
    }
}

impl Default for FixedBet {
    fn default() -> Self {
        Self::new(Chips::new(10))
    }
}

impl Strategy for FixedBet {
    fn execute(&mut self, req: &ActionRequest, _rng: &mut dyn RngCore) -> (PlayerAction, Chips) {
        if self.amount > Chips::ZERO && req.chips >= self.amount {
            (PlayerAction::Bet, self.amount)
        } else {
            (PlayerAction::Check, Chips::ZERO)
        }
    }
}

/// Folds, checks or bets at random.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    fold: f64,
    bet: f64,
}

impl RandomStrategy {
    /// Creates a strategy that folds with probability `fold` and bets with
    /// probability `bet`, checking otherwise.
    pub fn new(fold: f64, bet: f64) -> Self {
        let fold = fold.clamp(0.0, 1.0);
        let bet = bet.clamp(0.0, 1.0 - fold);
        Self { fold, bet }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(0.1, 0.3)
    }
}

impl Strategy for RandomStrategy {
    fn execute(&mut self, req: &ActionRequest, rng: &mut dyn RngCore) -> (PlayerAction, Chips) {
        let p = rng.random::<f64>();

        if p < self.fold {
            (PlayerAction::Fold, Chips::ZERO)
        } else if p < self.fold + self.bet && req.can_bet() {
            // Bet one to three big blinds.
            let big_blinds = rng.random_range(1..=3);
            let amount = (req.big_blind.amount() * big_blinds).clamp(1, req.chips.amount());
            (PlayerAction::Bet, Chips::new(amount))
        } else {
            (PlayerAction::Check, Chips::ZERO)
        }
    }
}

/// Replays a list of actions, checks when the list is exhausted.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    actions: VecDeque<(PlayerAction, Chips)>,
}

impl Scripted {
    /// Creates a strategy that replays `actions` in order.
    pub fn new(actions: impl IntoIterator<Item = (PlayerAction, Chips)>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl Strategy for Scripted {
    fn execute(&mut self, _req: &ActionRequest, _rng: &mut dyn RngCore) -> (PlayerAction, Chips) {
        self.actions
            .pop_front()
            .unwrap_or((PlayerAction::Check, Chips::ZERO))
    }
}
