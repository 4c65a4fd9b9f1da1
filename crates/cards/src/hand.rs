// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand parsing.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::{Card, CardError, Rank, Suit};

/// A hand parsing error.
///
/// Parsing stops at the first invalid card, the error identifies the
/// offending 1-based card slot and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The number of card descriptions is not [Hand::SIZE].
    #[error("expected {size} cards, got {0}", size = Hand::SIZE)]
    CardCount(usize),
    /// A card slot was left empty.
    #[error("card {0} is required")]
    MissingCard(usize),
    /// A card description failed to parse.
    #[error("card {slot}: {source}")]
    Card {
        /// The offending card slot.
        slot: usize,
        /// The card parsing failure.
        #[source]
        source: CardError,
    },
    /// The same card appears in two slots.
    #[error("card {slot}: duplicate card {card}")]
    DuplicateCard {
        /// The offending card slot.
        slot: usize,
        /// The repeated card.
        card: Card,
    },
}

/// A five cards poker hand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub fn new(cards: [Card; Self::SIZE]) -> Self {
        Self(cards)
    }

    /// Parses a hand from five raw card descriptions.
    ///
    /// Fails on the first card that is empty, malformed, or already in the
    /// hand, no partial hand is produced:
    ///
    /// ```
    /// # use handcast_cards::Hand;
    /// let hand = Hand::parse(&["K of Hearts", "10 Spades", "a d", "2 c", "2 h"]).unwrap();
    /// assert_eq!(hand.to_string(), "K♥ 10♠ A♦ 2♣ 2♥");
    ///
    /// let err = Hand::parse(&["K of Hearts", "XYZ", "a d", "2 c", "2 h"]).unwrap_err();
    /// assert_eq!(err.to_string(), "card 2: invalid rank \"XYZ\"");
    /// ```
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, HandError> {
        if raw.len() != Self::SIZE {
            return Err(HandError::CardCount(raw.len()));
        }

        let mut cards = [Card::new(Rank::Ace, Suit::Hearts); Self::SIZE];

        for (pos, text) in raw.iter().enumerate() {
            let slot = pos + 1;
            let text = text.as_ref().trim();

            if text.is_empty() {
                return Err(HandError::MissingCard(slot));
            }

            let card =
                Card::parse(text).map_err(|source| HandError::Card { slot, source })?;

            if cards[..pos].contains(&card) {
                return Err(HandError::DuplicateCard { slot, card });
            }

            cards[pos] = card;
        }

        Ok(Self(cards))
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.0
    }

    /// The display form of each card, in input order.
    pub fn display(&self) -> [String; Self::SIZE] {
        self.0.map(|c| c.to_string())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, card) in self.0.iter().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}
