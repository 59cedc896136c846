// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit counts for a pool of cards.
use holdem_cards::{Card, Rank, Suit};

/// The wheel straight with the Ace playing low.
const WHEEL: [Rank; 5] = [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];

/// The cards pool grouped by rank and by suit.
#[derive(Debug)]
pub(super) struct CardPool {
    /// Number of cards for each rank indexed by rank value.
    counts: [u8; 15],
    /// Distinct ranks from the highest.
    ranks: Vec<Rank>,
    /// Ranks of the cards in each suit from the highest.
    suits: [Vec<Rank>; 4],
}

impl CardPool {
    pub(super) fn new<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut counts = [0u8; 15];
        let mut suits: [Vec<Rank>; 4] = Default::default();

        for card in cards {
            counts[card.rank().value() as usize] += 1;
            suits[card.suit().index()].push(card.rank());
        }

        for suited in &mut suits {
            suited.sort_unstable_by(|a, b| b.cmp(a));
        }

        let ranks = Rank::ranks()
            .rev()
            .filter(|r| counts[r.value() as usize] > 0)
            .collect();

        Self {
            counts,
            ranks,
            suits,
        }
    }

    /// Ranks whose count matches the predicate, from the highest.
    pub(super) fn ranks_with<F>(&self, f: F) -> impl Iterator<Item = Rank>
    where
        F: Fn(u8) -> bool,
    {
        self.ranks
            .iter()
            .copied()
            .filter(move |r| f(self.counts[r.value() as usize]))
    }

    /// The `n` highest ranks that are not in `exclude`.
    pub(super) fn kickers(&self, exclude: &[Rank], n: usize) -> impl Iterator<Item = Rank> {
        self.ranks
            .iter()
            .copied()
            .filter(move |r| !exclude.contains(r))
            .take(n)
    }

    /// The best straight using cards of a single suit.
    pub(super) fn straight_flush(&self) -> Option<[Rank; 5]> {
        self.flush_suits()
            .filter_map(|suit| {
                let mut ranks = self.suits[suit.index()].clone();
                ranks.dedup();
                straight(&ranks)
            })
            .max()
    }

    /// The five highest ranks of the best flush.
    pub(super) fn flush(&self) -> Option<Vec<Rank>> {
        self.flush_suits()
            .map(|suit| self.suits[suit.index()][..5].to_vec())
            .max()
    }

    /// The highest straight in the pool.
    pub(super) fn straight(&self) -> Option<[Rank; 5]> {
        straight(&self.ranks)
    }

    /// Suits with at least five cards.
    fn flush_suits(&self) -> impl Iterator<Item = Suit> {
        Suit::suits().filter(|s| self.suits[s.index()].len() >= 5)
    }
}

/// Finds the highest five consecutive ranks in distinct ranks sorted from the
/// highest, falling back to the wheel.
fn straight(ranks: &[Rank]) -> Option<[Rank; 5]> {
    let run = ranks
        .windows(5)
        .find(|w| w[0].value() - w[4].value() == 4)
        .map(|w| [w[0], w[1], w[2], w[3], w[4]]);

    run.or_else(|| {
        WHEEL
            .iter()
            .all(|r| ranks.contains(r))
            .then_some(WHEEL)
    })
}
