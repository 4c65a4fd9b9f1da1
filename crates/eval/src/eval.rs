// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification and feature derivation.
use serde::{Deserialize, Serialize};
use std::fmt;

use handcast_cards::{Hand, Rank};

/// Poker hand categories ordered by strength.
///
/// The category is only used to derive the scalar strength score, the model
/// consumes the score and not the discrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No pair, nothing else.
    HighCard,
    /// One rank twice.
    OnePair,
    /// Two ranks twice each.
    TwoPair,
    /// One rank three times.
    ThreeOfAKind,
    /// Five ranks in sequence, the ace plays low in the wheel.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// One rank four times.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// The ten to ace straight in one suit.
    RoyalFlush,
}

impl HandCategory {
    /// Classifies a hand.
    ///
    /// ```
    /// # use handcast_eval::{Hand, HandCategory};
    /// let hand = Hand::parse(&["3 H", "3 D", "3 C", "7 S", "7 H"]).unwrap();
    /// assert_eq!(HandCategory::classify(&hand), HandCategory::FullHouse);
    /// ```
    pub fn classify(hand: &Hand) -> Self {
        Self::from_tally(&Tally::new(hand))
    }

    /// The strength score for this category, higher is stronger.
    pub fn strength(&self) -> f32 {
        match self {
            HandCategory::RoyalFlush => 1.0,
            HandCategory::StraightFlush => 0.95,
            HandCategory::FourOfAKind => 0.90,
            HandCategory::FullHouse => 0.85,
            HandCategory::Flush => 0.80,
            HandCategory::Straight => 0.75,
            HandCategory::ThreeOfAKind => 0.60,
            HandCategory::TwoPair => 0.50,
            HandCategory::OnePair => 0.40,
            HandCategory::HighCard => 0.30,
        }
    }

    /// Returns all categories in ascending strength order.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
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

    // The checks run strongest first, the boundary conditions overlap so
    // the order matters: quads also have two distinct ranks, a straight
    // flush is both a straight and a flush.
    fn from_tally(tally: &Tally) -> Self {
        if tally.flush && tally.royal {
            HandCategory::RoyalFlush
        } else if tally.flush && tally.straight {
            HandCategory::StraightFlush
        } else if tally.max_rank_frequency == 4 {
            HandCategory::FourOfAKind
        } else if tally.max_rank_frequency == 3 && tally.unique_ranks == 2 {
            HandCategory::FullHouse
        } else if tally.flush {
            HandCategory::Flush
        } else if tally.straight {
            HandCategory::Straight
        } else if tally.max_rank_frequency == 3 {
            HandCategory::ThreeOfAKind
        } else if tally.pairs == 2 {
            HandCategory::TwoPair
        } else if tally.max_rank_frequency == 2 {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{category}")
    }
}

/// The features derived from a hand for the action model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandFeatures {
    /// The category strength score, in `[0.3, 1.0]`.
    pub hand_strength: f32,
    /// The largest count of any single rank, in `1..=4`.
    pub max_rank_frequency: u8,
    /// The number of distinct ranks, in `1..=5`.
    pub unique_rank_count: u8,
    /// The number of distinct suits, in `1..=4`.
    pub unique_suit_count: u8,
}

impl HandFeatures {
    /// Evaluates a hand.
    ///
    /// Pure and deterministic, the result does not depend on the order of
    /// the cards in the hand.
    pub fn eval(hand: &Hand) -> Self {
        let tally = Tally::new(hand);

        Self {
            hand_strength: HandCategory::from_tally(&tally).strength(),
            max_rank_frequency: tally.max_rank_frequency,
            unique_rank_count: tally.unique_ranks,
            unique_suit_count: tally.unique_suits,
        }
    }

    /// The model input vector.
    ///
    /// The order, strength then max rank frequency then unique ranks then
    /// unique suits, is a contract with the external model.
    pub fn to_vector(&self) -> [f32; 4] {
        [
            self.hand_strength,
            self.max_rank_frequency as f32,
            self.unique_rank_count as f32,
            self.unique_suit_count as f32,
        ]
    }
}

/// Rank and suit counts for one hand.
#[derive(Debug)]
struct Tally {
    max_rank_frequency: u8,
    unique_ranks: u8,
    unique_suits: u8,
    pairs: u8,
    flush: bool,
    straight: bool,
    royal: bool,
}

impl Tally {
    fn new(hand: &Hand) -> Self {
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];

        for card in hand.cards() {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        // Distinct rank values in ascending order.
        let values = Rank::ranks()
            .filter(|r| rank_counts[*r as usize] > 0)
            .map(|r| r.value())
            .collect::<Vec<_>>();

        let max_rank_frequency = rank_counts.iter().copied().max().unwrap_or(0);
        let pairs = rank_counts.iter().filter(|&&c| c == 2).count() as u8;
        let unique_suits = suit_counts.iter().filter(|&&c| c > 0).count() as u8;

        // Five distinct ranks in sequence, or the ace low wheel.
        let straight =
            values.len() == 5 && (values[4] - values[0] == 4 || values == [2, 3, 4, 5, 14]);
        let royal = values == [10, 11, 12, 13, 14];

        Self {
            max_rank_frequency,
            unique_ranks: values.len() as u8,
            unique_suits,
            pairs,
            flush: unique_suits == 1,
            straight,
            royal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handcast_cards::Deck;
    use rand::prelude::*;

    fn hand(raw: [&str; 5]) -> Hand {
        Hand::parse(&raw).unwrap()
    }

    #[test]
    fn straight_flush() {
        let hand = hand(["2 H", "3 H", "4 H", "5 H", "6 H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::StraightFlush);

        let features = HandFeatures::eval(&hand);
        assert_eq!(features.hand_strength, 0.95);
        assert_eq!(features.to_vector(), [0.95, 1.0, 5.0, 1.0]);
    }

    #[test]
    fn royal_flush() {
        let hand = hand(["10 S", "J S", "Q S", "K S", "A S"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::RoyalFlush);

        let features = HandFeatures::eval(&hand);
        assert_eq!(features.hand_strength, 1.0);
        assert_eq!(features.to_vector(), [1.0, 1.0, 5.0, 1.0]);
    }

    #[test]
    fn four_of_a_kind() {
        let hand = hand(["2 H", "2 D", "2 C", "2 S", "5 H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::FourOfAKind);

        let features = HandFeatures::eval(&hand);
        assert_eq!(features.hand_strength, 0.90);
        assert_eq!(features.max_rank_frequency, 4);
        assert_eq!(features.unique_rank_count, 2);
    }

    #[test]
    fn full_house() {
        let hand = hand(["3 H", "3 D", "3 C", "7 S", "7 H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::FullHouse);

        let features = HandFeatures::eval(&hand);
        assert_eq!(features.hand_strength, 0.85);
        assert_eq!(features.max_rank_frequency, 3);
        assert_eq!(features.unique_rank_count, 2);
    }

    #[test]
    fn flush() {
        let hand = hand(["2 H", "5 H", "7 H", "9 H", "K H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::Flush);
        assert_eq!(HandFeatures::eval(&hand).hand_strength, 0.80);
    }

    #[test]
    fn straight() {
        let hand = hand(["5 H", "6 D", "7 C", "8 S", "9 H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::Straight);
        assert_eq!(HandFeatures::eval(&hand).hand_strength, 0.75);
    }

    #[test]
    fn wheel_straight() {
        // The ace plays low, mixed suits so no straight flush.
        let hand = hand(["2 H", "3 D", "4 C", "5 S", "A H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::Straight);
        assert_eq!(HandFeatures::eval(&hand).hand_strength, 0.75);
    }

    #[test]
    fn ace_high_is_not_a_straight() {
        // The ace does not wrap around, J Q K A 2 is ace high.
        let hand = hand(["J H", "Q D", "K C", "A S", "2 H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::HighCard);
    }

    #[test]
    fn three_of_a_kind() {
        let hand = hand(["3 H", "3 D", "3 C", "7 S", "9 H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::ThreeOfAKind);
        assert_eq!(HandFeatures::eval(&hand).hand_strength, 0.60);
    }

    #[test]
    fn two_pair() {
        let hand = hand(["3 H", "3 D", "7 C", "7 S", "9 H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::TwoPair);

        let features = HandFeatures::eval(&hand);
        assert_eq!(features.hand_strength, 0.50);
        assert_eq!(features.max_rank_frequency, 2);
        assert_eq!(features.unique_rank_count, 3);
    }

    #[test]
    fn one_pair() {
        let hand = hand(["3 H", "3 D", "7 C", "9 S", "J H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::OnePair);
        assert_eq!(HandFeatures::eval(&hand).hand_strength, 0.40);
    }

    #[test]
    fn high_card() {
        let hand = hand(["3 H", "5 D", "7 C", "9 S", "J H"]);
        assert_eq!(HandCategory::classify(&hand), HandCategory::HighCard);

        let features = HandFeatures::eval(&hand);
        assert_eq!(features.hand_strength, 0.30);
        assert_eq!(features.to_vector(), [0.30, 1.0, 5.0, 4.0]);
    }

    #[test]
    fn strength_monotonic() {
        let mut strength = 0.0;
        for category in HandCategory::categories() {
            assert!(category.strength() > strength);
            strength = category.strength();
        }
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = rand::rng();
        let hand = hand(["3 H", "3 D", "3 C", "7 S", "7 H"]);
        let features = HandFeatures::eval(&hand);

        let mut cards = *hand.cards();
        for _ in 0..20 {
            cards.shuffle(&mut rng);
            assert_eq!(HandFeatures::eval(&Hand::new(cards)), features);
        }
    }

    #[test]
    fn random_hands_invariants() {
        let strengths = HandCategory::categories()
            .map(|c| c.strength())
            .collect::<Vec<_>>();

        let mut rng = rand::rng();
        for _ in 0..1000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = std::array::from_fn(|_| deck.deal());
            let features = HandFeatures::eval(&Hand::new(cards));

            assert!(strengths.contains(&features.hand_strength));
            assert!((1..=4).contains(&features.max_rank_frequency));
            assert!((2..=5).contains(&features.unique_rank_count));
            assert!((1..=4).contains(&features.unique_suit_count));

            let vector = features.to_vector();
            assert_eq!(vector[0], features.hand_strength);
            assert_eq!(vector[1], features.max_rank_frequency as f32);
            assert_eq!(vector[2], features.unique_rank_count as f32);
            assert_eq!(vector[3], features.unique_suit_count as f32);
        }
    }
}
