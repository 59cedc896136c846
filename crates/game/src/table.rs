// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Table state types.
use ahash::AHashSet;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use holdem_eval::{Card, Deck, HandEvaluation, evaluate};

use crate::{Action, ActionRequest, Chips, Config, Player, PlayerAction, Street};

/// A player result at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    /// The player name.
    pub player: String,
    /// The player best hand, none if the other players folded.
    pub evaluation: Option<HandEvaluation>,
    /// The chips won from the pot.
    pub won: Chips,
}

/// A Poker table.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    dealer: usize,
    small_blind: Chips,
    big_blind: Chips,
    street: Street,
    history: Vec<Action>,
    pot: Chips,
    hands_dealt: bool,
    big_blind_seat: Option<usize>,
    rng: StdRng,
}

impl Table {
    /// The maximum number of players at a table.
    pub const MAX_PLAYERS: usize = 10;

    /// Creates a table with the given players, the table randomness is seeded
    /// from the config seed if set.
    pub fn new(players: Vec<Player>, config: &Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(players, config, rng)
    }

    fn with_rng(players: Vec<Player>, config: &Config, mut rng: StdRng) -> Result<Self> {
        if players.len() < 2 {
            bail!("A table needs at least 2 players");
        }

        if players.len() > Self::MAX_PLAYERS {
            bail!("A table seats at most {} players", Self::MAX_PLAYERS);
        }

        let mut names = AHashSet::with_capacity(players.len());
        for player in &players {
            if !names.insert(player.name.as_str()) {
                bail!("Player {} has already joined", player.name);
            }
        }

        if config.small_blind == Chips::ZERO || config.big_blind < config.small_blind {
            bail!(
                "Invalid blinds {}/{}",
                config.small_blind,
                config.big_blind
            );
        }

        Ok(Self {
            players,
            deck: Deck::new_and_shuffled(&mut rng),
            board: Vec::with_capacity(5),
            dealer: 0,
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            street: Street::Preflop,
            history: Vec::default(),
            pot: Chips::ZERO,
            hands_dealt: false,
            big_blind_seat: None,
            rng,
        })
    }

    /// Prepares the table for a new hand.
    ///
    /// Shuffles a new deck, clears the board and the pot, activates the players
    /// that have chips and picks the dealer at random among them.
    pub fn reset(&mut self) -> Result<()> {
        if self.count_with_chips() < 2 {
            bail!("Fewer than 2 players with chips");
        }

        self.deck = Deck::new_and_shuffled(&mut self.rng);
        self.board.clear();
        self.history.clear();
        self.pot = Chips::ZERO;
        self.street = Street::Preflop;
        self.hands_dealt = false;
        self.big_blind_seat = None;

        for player in &mut self.players {
            player.start_hand();
        }

        let active = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active)
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();
        self.dealer = *active.choose(&mut self.rng).context("No active players")?;

        Ok(())
    }

    /// Deals two cards to each active player.
    pub fn deal_hands(&mut self) -> Result<()> {
        if self.street != Street::Preflop || self.hands_dealt {
            bail!("Hands already dealt");
        }

        for player in self.players.iter_mut().filter(|p| p.is_active) {
            let c1 = self.deck.deal().context("Deck is empty")?;
            let c2 = self.deck.deal().context("Deck is empty")?;
            player.hole_cards = Some([c1, c2]);
            debug!("{} cards {c1} {c2}", player.name);
        }

        self.hands_dealt = true;
        Ok(())
    }

    /// Deals the first three board cards.
    pub fn deal_flop(&mut self) -> Result<()> {
        self.deal_board(Street::Flop)
    }

    /// Deals the fourth board card.
    pub fn deal_turn(&mut self) -> Result<()> {
        self.deal_board(Street::Turn)
    }

    /// Deals the last board card.
    pub fn deal_river(&mut self) -> Result<()> {
        self.deal_board(Street::River)
    }

    fn deal_board(&mut self, street: Street) -> Result<()> {
        if !self.hands_dealt || self.street.next() != Some(street) {
            bail!("Cannot deal the {street} on the {}", self.street);
        }

        let n = street.board_len() - self.board.len();
        let cards = self.deck.deal_n(n).context("Deck is empty")?;
        self.board.extend(cards);
        self.street = street;

        Ok(())
    }

    /// Posts the blinds, the player after the dealer pays the small blind and
    /// the next one the big blind. Returns the blind actions.
    pub fn post_blinds(&mut self) -> Result<Vec<Action>> {
        if self.street != Street::Preflop || self.big_blind_seat.is_some() {
            bail!("Blinds already posted");
        }

        if self.count_active() < 2 {
            bail!("Fewer than 2 active players");
        }

        let sb_seat = self.next_active(self.dealer);
        let bb_seat = self.next_active(sb_seat);

        let actions = vec![
            self.pay_blind(sb_seat, PlayerAction::SmallBlind, self.small_blind),
            self.pay_blind(bb_seat, PlayerAction::BigBlind, self.big_blind),
        ];

        self.big_blind_seat = Some(bb_seat);
        self.history.extend_from_slice(&actions);

        Ok(actions)
    }

    fn pay_blind(&mut self, seat: usize, action: PlayerAction, amount: Chips) -> Action {
        let player = &mut self.players[seat];
        let paid = player.bet(amount);
        self.pot += paid;

        Action {
            player: player.name.clone(),
            action,
            street: Street::Preflop,
            amount: paid,
        }
    }

    /// Asks each active player for an action on the current street.
    ///
    /// Preflop the first player to act is the one after the big blind, on the
    /// other streets the one after the dealer. Stops when a single player is
    /// left in the hand. Returns the actions taken.
    pub fn take_actions(&mut self) -> Result<Vec<Action>> {
        let start = match (self.street, self.big_blind_seat) {
            (Street::Preflop, Some(seat)) => self.next_active(seat),
            _ => self.next_active(self.dealer),
        };

        let num_seats = self.players.len();
        let mut actions = Vec::new();

        for seat in (0..num_seats).map(|n| (start + n) % num_seats) {
            if self.count_active() < 2 {
                break;
            }

            if !self.players[seat].is_active {
                continue;
            }

            let req = self.action_request(seat);
            let (action, amount) = self.players[seat].decide(&req, &mut self.rng);

            let action = Action {
                player: self.players[seat].name.clone(),
                action,
                street: self.street,
                amount,
            };

            self.validate_action(&action)?;
            self.apply_action(seat, &action);

            info!("{action}");
            self.history.push(action.clone());
            actions.push(action);
        }

        Ok(actions)
    }

    fn action_request(&self, seat: usize) -> ActionRequest {
        let player = &self.players[seat];
        ActionRequest {
            street: self.street,
            board: self.board.clone(),
            hole_cards: player.hole_cards,
            chips: player.chips,
            pot: self.pot,
            big_blind: self.big_blind,
        }
    }

    /// Checks if an action can be taken at this table.
    pub fn validate_action(&self, action: &Action) -> Result<()> {
        if action.street != self.street {
            bail!(
                "Action for the {} on the {}: {action}",
                action.street,
                self.street
            );
        }

        let Some(player) = self.players.iter().find(|p| p.name == action.player) else {
            bail!("Unknown player {}", action.player);
        };

        if !player.is_active {
            bail!("Player {} is not in the hand", player.name);
        }

        match action.action {
            PlayerAction::SmallBlind | PlayerAction::BigBlind => {
                bail!("Blinds are posted by the table: {action}");
            }
            PlayerAction::Bet if action.amount == Chips::ZERO => {
                bail!("Bet amount must be positive: {action}");
            }
            PlayerAction::Bet if action.amount > player.chips => {
                bail!(
                    "Player {} bets {} with {} chips",
                    player.name,
                    action.amount,
                    player.chips
                );
            }
            PlayerAction::Fold | PlayerAction::Check if action.amount > Chips::ZERO => {
                bail!("Unexpected amount for {}: {action}", action.action.label());
            }
            _ => Ok(()),
        }
    }

    fn apply_action(&mut self, seat: usize, action: &Action) {
        let player = &mut self.players[seat];
        match action.action {
            PlayerAction::Fold => player.fold(),
            PlayerAction::Bet => self.pot += player.bet(action.amount),
            _ => {}
        }
    }

    /// Pays the pot to the best hand, equal hands split the pot.
    ///
    /// Returns the results for the players still in the hand.
    pub fn showdown(&mut self) -> Result<Vec<Showdown>> {
        let pot = self.pot;
        let mut active = self.players.iter_mut().filter(|p| p.is_active).peekable();

        let Some(first) = active.next() else {
            bail!("No active players at showdown");
        };

        // The last player left takes the pot.
        if active.peek().is_none() {
            first.chips += pot;
            self.pot = Chips::ZERO;
            return Ok(vec![Showdown {
                player: first.name.clone(),
                evaluation: None,
                won: pot,
            }]);
        }

        let mut hands = Vec::new();
        for player in std::iter::once(first).chain(active) {
            let evaluation = evaluate(player.cards(), &self.board)?;
            hands.push((player, evaluation));
        }

        let best = hands
            .iter()
            .map(|(_, hv)| hv)
            .max()
            .cloned()
            .context("No hands at showdown")?;

        let num_winners = hands.iter().filter(|(_, hv)| *hv == best).count() as u32;
        let share = pot / num_winners;
        let mut odd_chips = pot % num_winners;

        let mut results = Vec::with_capacity(hands.len());
        for (player, evaluation) in hands {
            let mut won = Chips::ZERO;
            if evaluation == best {
                won = share + odd_chips;
                odd_chips = Chips::ZERO;
                player.chips += won;
            }

            results.push(Showdown {
                player: player.name.clone(),
                evaluation: Some(evaluation),
                won,
            });
        }

        self.pot = Chips::ZERO;
        Ok(results)
    }

    /// The table players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The actions taken in this hand.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// The chips in the pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The cards left in the deck.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// Counts the players still in the hand.
    pub fn count_active(&self) -> usize {
        self.players.iter().filter(|p| p.is_active).count()
    }

    /// Counts the players that have chips.
    pub fn count_with_chips(&self) -> usize {
        self.players.iter().filter(|p| p.chips > Chips::ZERO).count()
    }

    /// The first active seat after `seat`, `seat` itself if no other player
    /// is active.
    fn next_active(&self, seat: usize) -> usize {
        let num_seats = self.players.len();
        (1..num_seats)
            .map(|n| (seat + n) % num_seats)
            .find(|&idx| self.players[idx].is_active)
            .unwrap_or(seat)
    }
}
