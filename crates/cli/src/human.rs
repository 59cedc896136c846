// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! A strategy that asks the user for actions.
use rand::RngCore;
use std::io::{self, BufRead, Write};

use holdem_game::{
    ActionRequest, Chips, PlayerAction, Strategy, engine::print_cards, eval::evaluate,
};

/// Reads actions from a line based input, the player folds on end of input.
pub struct Human<R> {
    input: R,
}

impl Human<io::BufReader<io::Stdin>> {
    /// Creates a human player that reads from stdin.
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> Human<R> {
    /// Creates a human player that reads from `input`.
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn prompt(&self, req: &ActionRequest) {
        let cards = req.hole_cards.map(|c| print_cards(&c)).unwrap_or_default();
        println!();
        println!("Street: {}  Pot: {}  Chips: {}", req.street, req.pot, req.chips);
        println!("Board:  {}", print_cards(&req.board));
        print!("Cards:  {cards}");
        if let Some(hv) = req
            .hole_cards
            .and_then(|c| evaluate(&c, &req.board).ok())
        {
            print!("  ({hv})");
        }
        println!();
        print!("[f]old, [c]heck or [b]et <amount>: ");
        let _ = io::stdout().flush();
    }
}

/// Parses a user action, checks that bets are within the player chips.
fn parse_action(line: &str, chips: Chips) -> Result<(PlayerAction, Chips), String> {
    let mut tokens = line.split_whitespace();
    let cmd = tokens.next().unwrap_or_default().to_ascii_lowercase();

    match cmd.as_str() {
        "f" | "fold" => Ok((PlayerAction::Fold, Chips::ZERO)),
        "c" | "check" => Ok((PlayerAction::Check, Chips::ZERO)),
        "b" | "bet" => {
            let amount = tokens
                .next()
                .ok_or("Missing bet amount")?
                .parse::<u32>()
                .map_err(|e| format!("Invalid bet amount: {e}"))?;

            if amount == 0 || Chips::new(amount) > chips {
                Err(format!("Bet must be between 1 and {chips}"))
            } else {
                Ok((PlayerAction::Bet, Chips::new(amount)))
            }
        }
        _ => Err(format!("Unknown action '{}'", line.trim())),
    }
}

impl<R: BufRead + Send + 'static> Strategy for Human<R> {
    fn execute(&mut self, req: &ActionRequest, _rng: &mut dyn RngCore) -> (PlayerAction, Chips) {
        loop {
            self.prompt(req);

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return (PlayerAction::Fold, Chips::ZERO),
                Ok(_) => {}
            }

            match parse_action(&line, req.chips) {
                Ok(action) => return action,
                Err(e) => println!("{e}"),
            }
        }
    }
}
