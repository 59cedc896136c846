// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! The hand engine.
use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use holdem_eval::Card;

use crate::{Action, Showdown, Table};

/// What happened in a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    /// The hand number, starting from 1.
    pub hand: usize,
    /// The board cards.
    pub board: Vec<Card>,
    /// The blinds and the players actions.
    pub actions: Vec<Action>,
    /// The results for the players left at showdown.
    pub showdown: Vec<Showdown>,
}

/// Runs hands at a table.
#[derive(Debug)]
pub struct Engine {
    table: Table,
    hands_played: usize,
}

impl Engine {
    /// Creates an engine for the given table.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            hands_played: 0,
        }
    }

    /// The engine table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Plays up to `hands` hands, stops earlier if fewer than two players
    /// have chips left.
    pub fn run(&mut self, hands: usize) -> Result<Vec<HandSummary>> {
        info!("Starting new game");

        let mut summaries = Vec::with_capacity(hands);
        for _ in 0..hands {
            if self.table.count_with_chips() < 2 {
                info!("Game over, fewer than 2 players with chips");
                break;
            }

            summaries.push(self.run_hand()?);
        }

        Ok(summaries)
    }

    /// Plays a hand from the deal to the showdown.
    pub fn run_hand(&mut self) -> Result<HandSummary> {
        self.hands_played += 1;
        info!("Starting hand {}", self.hands_played);

        self.table.reset()?;
        let dealer = &self.table.players()[self.table.dealer()];
        info!("Dealer: {}", dealer.name);

        self.table.deal_hands()?;
        for player in self.table.players().iter().filter(|p| p.is_active) {
            debug!("{}: {}", player.name, print_cards(player.cards()));
        }

        info!("Posting blinds");
        for action in self.table.post_blinds()? {
            info!("{action}");
        }

        self.table.take_actions()?;

        let streets: [(&str, fn(&mut Table) -> Result<()>); 3] = [
            ("flop", Table::deal_flop),
            ("turn", Table::deal_turn),
            ("river", Table::deal_river),
        ];

        for (street, deal) in streets {
            if self.table.count_active() < 2 {
                break;
            }

            info!("Dealing {street}");
            deal(&mut self.table)?;
            info!("Board: {}", print_cards(self.table.board()));
            self.table.take_actions()?;
        }

        let pot = self.table.pot();
        let showdown = self.table.showdown()?;
        for result in &showdown {
            match &result.evaluation {
                Some(hv) => info!("{} shows {hv} and wins {}", result.player, result.won),
                None => info!("{} wins {} uncontested", result.player, result.won),
            }
        }
        debug!("Pot {pot} paid");

        Ok(HandSummary {
            hand: self.hands_played,
            board: self.table.board().to_vec(),
            actions: self.table.history().to_vec(),
            showdown,
        })
    }
}

/// Formats cards separated by spaces.
pub fn print_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
