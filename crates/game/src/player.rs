// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use rand::RngCore;
use std::fmt;

use holdem_cards::Card;

use crate::{
    Chips, PlayerAction,
    strategy::{ActionRequest, Strategy},
};

/// A table player state.
pub struct Player {
    /// The player name.
    pub name: String,
    /// This player chips.
    pub chips: Chips,
    /// This player private cards.
    pub hole_cards: Option<[Card; 2]>,
    /// This player is active in the hand.
    pub is_active: bool,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a new player that acts using the given strategy.
    pub fn new<S: Strategy>(name: impl Into<String>, chips: Chips, strategy: S) -> Self {
        Self {
            name: name.into(),
            chips,
            hole_cards: None,
            is_active: true,
            strategy: Box::new(strategy),
        }
    }

    /// The player hole cards, empty if no cards have been dealt.
    pub fn cards(&self) -> &[Card] {
        self.hole_cards.as_ref().map_or(&[], |cards| cards.as_slice())
    }

    /// Takes up to `amount` chips from this player, a player who doesn't have
    /// enough chips puts all his chips in. Returns the chips taken.
    pub fn bet(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        paid
    }

    /// Sets this player in fold state.
    pub fn fold(&mut self) {
        self.is_active = false;
        self.hole_cards = None;
    }

    /// Asks the player strategy for an action.
    pub(crate) fn decide(
        &mut self,
        req: &ActionRequest,
        rng: &mut dyn RngCore,
    ) -> (PlayerAction, Chips) {
        self.strategy.execute(req, rng)
    }

    /// Reset state for a new hand.
    pub(crate) fn start_hand(&mut self) {
        self.is_active = self.chips > Chips::ZERO;
        self.hole_cards = None;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("chips", &self.chips)
            .field("hole_cards", &self.hole_cards)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}
