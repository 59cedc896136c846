// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Streets and player actions.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Chips;

/// A betting street.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Betting after the hole cards are dealt.
    Preflop,
    /// Betting after the first three board cards.
    Flop,
    /// Betting after the fourth board card.
    Turn,
    /// Betting after the last board card.
    River,
}

impl Street {
    /// The street that follows this one.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Number of board cards once this street has been dealt.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        f.write_str(street)
    }
}

/// A Player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Player pays small blind.
    SmallBlind,
    /// Player pays big blind.
    BigBlind,
    /// Player folds.
    Fold,
    /// Player checks.
    Check,
    /// Player bets.
    Bet,
}

impl PlayerAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::SmallBlind => "SB",
            PlayerAction::BigBlind => "BB",
            PlayerAction::Fold => "FOLD",
            PlayerAction::Check => "CHECK",
            PlayerAction::Bet => "BET",
        }
    }

    /// Checks if this is a forced blind bet.
    pub fn is_blind(&self) -> bool {
        matches!(self, PlayerAction::SmallBlind | PlayerAction::BigBlind)
    }
}

/// An action taken by a player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the player who acted.
    pub player: String,
    /// The action.
    pub action: PlayerAction,
    /// The street the action was taken on.
    pub street: Street,
    /// The chips for bets and blinds.
    pub amount: Chips,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player, self.action.label())?;
        if self.amount > Chips::ZERO {
            write!(f, " {}", self.amount)?;
        }

        Ok(())
    }
}
