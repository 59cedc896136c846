// Copyright (C) 2025 Holdem Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator counts ranks and suits in the cards pool and checks the hand
//! categories from the strongest to the weakest, the first category found is
//! the best hand that can be made with any five cards from the pool.
//!
//! The result of an evaluation is a [HandEvaluation] that holds the category
//! and the tie-break ranks, evaluations are compared by category first and then
//! lexicographically by their tie-break ranks. Suits are only used to detect
//! flushes and never appear in the result, so the same hand made with different
//! suits gives equal evaluations.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use holdem_cards::{Card, Rank};

mod pool;
use pool::CardPool;

/// Evaluation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// There are fewer than five cards in the pool.
    #[error("cannot evaluate a poker hand with fewer than 5 cards")]
    InsufficientCards,
}

/// The hand category, from the weakest to the strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum HandCategory {
    /// No pair.
    HighCard = 1,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category ordinal, 1 for high card up to 10 for a royal flush.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}

/// The evaluation of the best five cards hand in a cards pool.
///
/// The derived ordering compares the category first and then the tie-break
/// ranks from the most significant, as the ranks for the same category always
/// have the same length this is the poker hands ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandEvaluation {
    category: HandCategory,
    ranks: Vec<Rank>,
}

impl HandEvaluation {
    /// Multiplier for the category in the composite score.
    const CATEGORY_BASE: u64 = 1_000_000_000_000_000;

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break ranks, most significant first.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Composite integer score, a higher score is a better hand.
    ///
    /// The score is `category * 10^15 + sum(rank_i * 100^(5 - i))`, comparing
    /// scores gives the same result as comparing evaluations.
    pub fn score(&self) -> u64 {
        let ranks = self
            .ranks
            .iter()
            .zip((1..=5).rev())
            .map(|(r, exp)| r.value() as u64 * 100u64.pow(exp))
            .sum::<u64>();
        self.category.ordinal() as u64 * Self::CATEGORY_BASE + ranks
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (idx, rank) in self.ranks.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rank}")?;
        }
        f.write_str("]")
    }
}

/// Evaluates the best five cards hand made with the private and shared cards.
///
/// All the cards are considered, the pool must have at least 5 cards.
pub fn evaluate(private: &[Card], shared: &[Card]) -> Result<HandEvaluation, EvalError> {
    if private.len() + shared.len() < 5 {
        return Err(EvalError::InsufficientCards);
    }

    let pool = CardPool::new(private.iter().chain(shared));
    let (category, ranks) = classify(&pool);
    Ok(HandEvaluation { category, ranks })
}

/// Finds the strongest category in the pool and its tie-break ranks.
fn classify(pool: &CardPool) -> (HandCategory, Vec<Rank>) {
    if let Some(ranks) = pool.straight_flush() {
        let category = if ranks[0] == Rank::Ace {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return (category, ranks.to_vec());
    }

    if let Some(quads) = pool.ranks_with(|c| c >= 4).next() {
        let mut ranks = vec![quads];
        ranks.extend(pool.kickers(&[quads], 1));
        return (HandCategory::FourOfAKind, ranks);
    }

    let trips = pool.ranks_with(|c| c == 3).next();
    let pairs = pool.ranks_with(|c| c == 2).collect::<Vec<_>>();

    if let Some(trips) = trips {
        // The other rank may be a pair or a second set of trips.
        if let Some(pair) = pool.ranks_with(|c| c >= 2).find(|&r| r != trips) {
            return (HandCategory::FullHouse, vec![trips, pair]);
        }
    }

    // Three pairs and no trips, the top pair fills the trips slot.
    if pairs.len() >= 3 {
        return (HandCategory::FullHouse, vec![pairs[0], pairs[1]]);
    }

    if let Some(ranks) = pool.flush() {
        return (HandCategory::Flush, ranks);
    }

    if let Some(ranks) = pool.straight() {
        return (HandCategory::Straight, ranks.to_vec());
    }

    if let Some(trips) = trips {
        let mut ranks = vec![trips];
        ranks.extend(pool.kickers(&[trips], 2));
        return (HandCategory::ThreeOfAKind, ranks);
    }

    match pairs.as_slice() {
        [high, low, ..] => {
            let mut ranks = vec![*high, *low];
            ranks.extend(pool.kickers(&[*high, *low], 1));
            (HandCategory::TwoPair, ranks)
        }
        [pair] => {
            let mut ranks = vec![*pair];
            ranks.extend(pool.kickers(&[*pair], 3));
            (HandCategory::Pair, ranks)
        }
        [] => (HandCategory::HighCard, pool.kickers(&[], 5).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::{Deck, Suit, parse_cards};
    use rand::{SeedableRng, rngs::StdRng};

    fn eval(hole: &str, board: &str) -> HandEvaluation {
        let hole = parse_cards(hole).unwrap();
        let board = parse_cards(board).unwrap();
        evaluate(&hole, &board).unwrap()
    }

    fn ranks(s: &str) -> Vec<Rank> {
        s.chars()
            .map(|c| format!("{c}s").parse::<Card>().unwrap().rank())
            .collect()
    }

    fn assert_hand(hv: &HandEvaluation, category: HandCategory, expected: &str) {
        assert_eq!(hv.category(), category, "{hv}");
        assert_eq!(hv.ranks(), ranks(expected), "{hv}");
    }

    #[test]
    fn high_card() {
        let hv = eval("As Kh", "Qd 9c 7s 3h 2d");
        assert_hand(&hv, HandCategory::HighCard, "AKQ97");
    }

    #[test]
    fn pair() {
        let hv = eval("Ks Kh", "Qd Jc Ts 3h 2d");
        assert_hand(&hv, HandCategory::Pair, "KQJT");
    }

    #[test]
    fn two_pair() {
        let hv = eval("Ks Kh", "9d 9c 7s 3h 2d");
        assert_hand(&hv, HandCategory::TwoPair, "K97");
    }

    #[test]
    fn three_of_a_kind() {
        let hv = eval("Ks Kh", "Kd 9c 7s 3h 2d");
        assert_hand(&hv, HandCategory::ThreeOfAKind, "K97");
    }

    #[test]
    fn straight() {
        let hv = eval("9s 8h", "7d 6c 5s 3h 2d");
        assert_hand(&hv, HandCategory::Straight, "98765");
    }

    #[test]
    fn flush() {
        let hv = eval("Ah Jh", "9h 6h 3h Kc 2d");
        assert_hand(&hv, HandCategory::Flush, "AJ963");
    }

    #[test]
    fn full_house() {
        let hv = eval("Ks Kh", "Kd 9c 9s 3h 2d");
        assert_hand(&hv, HandCategory::FullHouse, "K9");
    }

    #[test]
    fn four_of_a_kind() {
        let hv = eval("Ks Kh", "Kd Kc 9s 3h 2d");
        assert_hand(&hv, HandCategory::FourOfAKind, "K9");
    }

    #[test]
    fn straight_flush() {
        let hv = eval("9s 8s", "7s 6s 5s 3h 2d");
        assert_hand(&hv, HandCategory::StraightFlush, "98765");
    }

    #[test]
    fn royal_flush() {
        let hv = eval("As Ks", "Qs Js Ts 3h 2d");
        assert_hand(&hv, HandCategory::RoyalFlush, "AKQJT");
    }

    #[test]
    fn five_cards_only() {
        let hv = eval("", "As Ks Qs Js Ts");
        assert_hand(&hv, HandCategory::RoyalFlush, "AKQJT");

        let hv = eval("7c 7d", "7h 2s 2c");
        assert_hand(&hv, HandCategory::FullHouse, "72");
    }

    #[test]
    fn insufficient_cards() {
        let hole = parse_cards("As Kh").unwrap();
        let board = parse_cards("Qd 9c").unwrap();
        assert_eq!(evaluate(&hole, &board), Err(EvalError::InsufficientCards));
        assert_eq!(evaluate(&[], &[]), Err(EvalError::InsufficientCards));
        assert_eq!(
            EvalError::InsufficientCards.to_string(),
            "cannot evaluate a poker hand with fewer than 5 cards"
        );
    }

    #[test]
    fn wheel_straight() {
        let wheel = eval("As 5h", "4d 3c 2s");
        assert_hand(&wheel, HandCategory::Straight, "5432A");

        let six_high = eval("6s 5h", "4d 3c 2s");
        assert_hand(&six_high, HandCategory::Straight, "65432");
        assert!(wheel < six_high);

        // Ace high beats the wheel.
        let broadway = eval("As Kh", "Qd Jc Ts");
        assert!(broadway > six_high);
    }

    #[test]
    fn wheel_with_higher_straight_available() {
        let hv = eval("As 6h", "5d 4c 3s 2h Kd");
        assert_hand(&hv, HandCategory::Straight, "65432");
    }

    #[test]
    fn wheel_straight_flush() {
        let hv = eval("Ah 5h", "4h 3h 2h Ks Qd");
        assert_hand(&hv, HandCategory::StraightFlush, "5432A");

        let hv = eval("Ah 5h", "4h 3h 2h 6h Qd");
        assert_hand(&hv, HandCategory::StraightFlush, "65432");
    }

    #[test]
    fn seven_cards_straight_uses_highest_window() {
        let hv = eval("Ts 9h", "8d 7c 6s 5h 4d");
        assert_hand(&hv, HandCategory::Straight, "T9876");

        // Duplicated ranks in the middle of the run.
        let hv = eval("9s 9h", "8d 7c 6s 5h 5d");
        assert_hand(&hv, HandCategory::Straight, "98765");
    }

    #[test]
    fn straight_flush_with_incidental_cards() {
        let hv = eval("9s 8s", "7s 6s 5s As Kc");
        assert_hand(&hv, HandCategory::StraightFlush, "98765");

        // A pair of nines on the board does not matter.
        let hv = eval("9s 8s", "7s 6s 5s 9c Kc");
        assert_hand(&hv, HandCategory::StraightFlush, "98765");
    }

    #[test]
    fn flush_and_straight_in_different_cards() {
        // Spade flush and a straight using a diamond, no straight flush.
        let hv = eval("9s 8s", "7s 6d 5s 2s Kc");
        assert_hand(&hv, HandCategory::Flush, "98752");

        // A straight flush in the suit beats the flush top cards.
        let hv = eval("9s 8s", "7s 6s 5s As Ks");
        assert_hand(&hv, HandCategory::StraightFlush, "98765");
    }

    #[test]
    fn flush_over_straight() {
        let hv = eval("Kh Th", "9h 5h 2h Qd Jc");
        assert_hand(&hv, HandCategory::Flush, "KT952");
    }

    #[test]
    fn flush_uses_five_highest_suited_cards() {
        let hv = eval("Ah 2h", "9h 7h 5h 4h Kd");
        assert_hand(&hv, HandCategory::Flush, "A9754");
    }

    #[test]
    fn full_house_from_three_pairs() {
        let hv = eval("As Ah", "Ks Kh Qd Qc 2d");
        assert_hand(&hv, HandCategory::FullHouse, "AK");

        // Six cards.
        let hv = eval("3s 3h", "Ks Kh 7d 7c");
        assert_hand(&hv, HandCategory::FullHouse, "K7");
    }

    #[test]
    fn full_house_from_two_trips() {
        let hv = eval("9s 9h", "9d 4c 4s 4h Ad");
        assert_hand(&hv, HandCategory::FullHouse, "94");
    }

    #[test]
    fn full_house_uses_highest_pair() {
        let hv = eval("Ks Kh", "Kd Qc Qs 7h 7d");
        assert_hand(&hv, HandCategory::FullHouse, "KQ");
    }

    #[test]
    fn four_of_a_kind_with_trips_kicker() {
        let hv = eval("8s 8h", "8d 8c Js Jh Jd");
        assert_hand(&hv, HandCategory::FourOfAKind, "8J");
    }

    #[test]
    fn best_kickers_selected() {
        let hv = eval("As Ah", "Ad Kc Qs 7h 2d");
        assert_hand(&hv, HandCategory::ThreeOfAKind, "AKQ");

        let hv = eval("Ks Kh", "9d 9c Qs 2h 3d");
        assert_hand(&hv, HandCategory::TwoPair, "K9Q");

        let hv = eval("Ks Kh", "Ad 9c 8s 2h 3d");
        assert_hand(&hv, HandCategory::Pair, "KA98");

        let hv = eval("2s 4h", "Ad 9c 8s Th 3d");
        assert_hand(&hv, HandCategory::HighCard, "AT984");
    }

    #[test]
    fn kicker_tie_breaks() {
        let q_kicker = eval("Ks Kh", "Qd 9c 7s 3h 2d");
        let j_kicker = eval("Kd Kc", "Jd 9h 7c 3s 2c");
        assert!(q_kicker > j_kicker);

        let fifth_card = eval("As Kh", "Qd 9c 7s 3h 2d");
        let lower_fifth = eval("Ad Kc", "Qh 9s 6s 3d 2c");
        assert!(fifth_card > lower_fifth);

        let kings_tens = eval("Ks Kh", "Td Tc 4s 3h 2d");
        let kings_nines = eval("Kd Kc", "9d 9h 4c 3s 2c");
        assert!(kings_tens > kings_nines);

        let aces_kicker = eval("Ks Kh", "Kd Kc As 3h 2d");
        let queen_kicker = eval("Ks Kh", "Kd Kc Qs 3h 2d");
        assert!(aces_kicker > queen_kicker);

        let full_of_aces = eval("Ks Kh", "Kd As Ac 3h 2d");
        let full_of_queens = eval("Ks Kh", "Kd Qs Qc 3h 2d");
        assert!(full_of_aces > full_of_queens);

        let ace_flush = eval("Ah 2h", "9h 7h 5h Kd Qc");
        let king_flush = eval("Kh Qh", "Jh 9h 7h 2d 3c");
        assert!(ace_flush > king_flush);
    }

    #[test]
    fn identical_hands_tie() {
        let hv1 = eval("As Kh", "Qd 9c 7s 3h 2d");
        let hv2 = eval("Ac Kd", "Qs 9h 7d 3s 2c");
        assert_eq!(hv1, hv2);
        assert_eq!(hv1.score(), hv2.score());

        let royal1 = eval("As Ks", "Qs Js Ts 3h 2d");
        let royal2 = eval("Ah Kh", "Qh Jh Th 3s 2c");
        assert_eq!(royal1, royal2);

        let straight1 = eval("9s 8h", "7d 6c 5s 3h 2d");
        let straight2 = eval("9d 8c", "7h 6s 5d 3s 2c");
        assert_eq!(straight1, straight2);
    }

    #[test]
    fn categories_are_ordered() {
        let hands = [
            ("As Kh", "Qd 9c 7s 3h 2d"),
            ("2s 2h", "Qd 9c 7s 3h 4d"),
            ("2s 2h", "3d 3c 7s 5h 4d"),
            ("2s 2h", "2d 9c 7s 3h 4d"),
            ("2s 3h", "4d 5c As Th Kd"),
            ("2h 3h", "4h 5h 7h Ts Kd"),
            ("2s 2h", "2d 3c 3s Th Kd"),
            ("2s 2h", "2d 2c 3s Th Kd"),
            ("2s 3s", "4s 5s As Th Kd"),
            ("Ts Js", "Qs Ks As 2h 3d"),
        ];

        let evals = hands
            .iter()
            .map(|(hole, board)| eval(hole, board))
            .collect::<Vec<_>>();

        for (hv, category) in evals.iter().zip(HandCategory::categories()) {
            assert_eq!(hv.category(), category, "{hv}");
        }

        // The weakest hand of a category beats the strongest of a lower one.
        for (i, lower) in evals.iter().enumerate() {
            for higher in &evals[i + 1..] {
                assert!(higher > lower, "{higher} > {lower}");
                assert!(higher.score() > lower.score());
            }
        }

        let best_high_card = HandEvaluation {
            category: HandCategory::HighCard,
            ranks: ranks("AKQJ9"),
        };
        let worst_pair = HandEvaluation {
            category: HandCategory::Pair,
            ranks: ranks("2543"),
        };
        assert!(worst_pair > best_high_card);
        assert!(worst_pair.score() > best_high_card.score());
    }

    #[test]
    fn score_values() {
        let hv = eval("As Kh", "Qd 9c 7s 3h 2d");
        assert_eq!(hv.score(), 1_000_000_000_000_000 + 141_312_090_700);

        let hv = eval("As Ks", "Qs Js Ts 3h 2d");
        assert_eq!(hv.score(), 10_000_000_000_000_000 + 141_312_111_000);
    }

    #[test]
    fn display() {
        assert_eq!(HandCategory::ThreeOfAKind.to_string(), "Three of a Kind");
        let hv = eval("Ks Kh", "Qd Jc Ts 3h 2d");
        assert_eq!(hv.to_string(), "Pair [K Q J T]");
    }

    #[test]
    fn evaluate_is_idempotent() {
        let hole = parse_cards("Ks Kh").unwrap();
        let board = parse_cards("Qd Jc Ts 3h 2d").unwrap();
        let hv1 = evaluate(&hole, &board).unwrap();
        let hv2 = evaluate(&hole, &board).unwrap();
        assert_eq!(hv1, hv2);
        assert_eq!(hv1.score(), hv2.score());

        // Split between hole and board does not matter.
        let all = [hole.clone(), board.clone()].concat();
        assert_eq!(evaluate(&all, &[]).unwrap(), hv1);
        assert_eq!(evaluate(&[], &all).unwrap(), hv1);
    }

    #[test]
    fn suit_relabeling_gives_same_evaluation() {
        let relabel = |s: Suit| match s {
            Suit::Spades => Suit::Hearts,
            Suit::Hearts => Suit::Clubs,
            Suit::Diamonds => Suit::Spades,
            Suit::Clubs => Suit::Diamonds,
        };

        let mut rng = StdRng::seed_from_u64(101);
        for k in 5..=7 {
            Deck::default().sample(&mut rng, 5_000, k, |hand| {
                let relabeled = hand
                    .iter()
                    .map(|c| Card::new(c.rank(), relabel(c.suit())))
                    .collect::<Vec<_>>();

                let hv1 = evaluate(&hand[..2], &hand[2..]).unwrap();
                let hv2 = evaluate(&relabeled[..2], &relabeled[2..]).unwrap();
                assert_eq!(hv1, hv2);

                let mut reversed = hand.to_vec();
                reversed.reverse();
                assert_eq!(evaluate(&reversed, &[]).unwrap(), hv1);
            });
        }
    }

    #[test]
    fn score_order_matches_evaluation_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut evals = Vec::new();
        Deck::default().sample(&mut rng, 2_000, 7, |hand| {
            evals.push(evaluate(&hand[..2], &hand[2..]).unwrap());
        });

        for pair in evals.windows(2) {
            assert_eq!(pair[0].cmp(&pair[1]), pair[0].score().cmp(&pair[1].score()));
        }
    }

    #[test]
    fn tie_break_lengths() {
        let mut rng = StdRng::seed_from_u64(11);
        Deck::default().sample(&mut rng, 5_000, 7, |hand| {
            let hv = evaluate(&hand[..2], &hand[2..]).unwrap();
            let expected = match hv.category() {
                HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
                HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
                HandCategory::Pair => 4,
                _ => 5,
            };
            assert_eq!(hv.ranks().len(), expected, "{hv}");
        });
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 11];
        Deck::default().for_each(5, |hand| {
            let hv = evaluate(hand, &[]).unwrap();
            counts[hv.category().ordinal() as usize] += 1;
        });

        assert_eq!(counts[HandCategory::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandCategory::Pair as usize], 1_098_240);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 36);
        assert_eq!(counts[HandCategory::RoyalFlush as usize], 4);
    }
}
