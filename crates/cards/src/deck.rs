// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashMap;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};
use thiserror::Error;

/// Rank parsing vocabulary, face ranks accept letter and name aliases.
static RANK_TOKENS: LazyLock<AHashMap<&'static str, Rank>> = LazyLock::new(|| {
    let mut tokens = AHashMap::with_capacity(17);

    tokens.insert("2", Rank::Deuce);
    tokens.insert("3", Rank::Trey);
    tokens.insert("4", Rank::Four);
    tokens.insert("5", Rank::Five);
    tokens.insert("6", Rank::Six);
    tokens.insert("7", Rank::Seven);
    tokens.insert("8", Rank::Eight);
    tokens.insert("9", Rank::Nine);
    tokens.insert("10", Rank::Ten);
    tokens.insert("J", Rank::Jack);
    tokens.insert("JACK", Rank::Jack);
    tokens.insert("Q", Rank::Queen);
    tokens.insert("QUEEN", Rank::Queen);
    tokens.insert("K", Rank::King);
    tokens.insert("KING", Rank::King);
    tokens.insert("A", Rank::Ace);
    tokens.insert("ACE", Rank::Ace);

    tokens
});

/// Suit parsing vocabulary, letter and full name aliases.
static SUIT_TOKENS: LazyLock<AHashMap<&'static str, Suit>> = LazyLock::new(|| {
    let mut tokens = AHashMap::with_capacity(8);

    tokens.insert("H", Suit::Hearts);
    tokens.insert("HEARTS", Suit::Hearts);
    tokens.insert("D", Suit::Diamonds);
    tokens.insert("DIAMONDS", Suit::Diamonds);
    tokens.insert("C", Suit::Clubs);
    tokens.insert("CLUBS", Suit::Clubs);
    tokens.insert("S", Suit::Spades);
    tokens.insert("SPADES", Suit::Spades);

    tokens
});

/// A card parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The string cannot be decomposed into a rank and a suit token.
    #[error("invalid card format {0:?}")]
    Format(String),
    /// The rank token is not in the recognized vocabulary.
    #[error("invalid rank {0:?}")]
    Rank(String),
    /// The suit token is not in the recognized vocabulary.
    #[error("invalid suit {0:?}")]
    Suit(String),
}

/// A poker card.
///
/// An immutable rank and suit pair parsed from a textual description like
/// `K of Hearts` or `10 spades`, its [Display](fmt::Display) form is the
/// rank text followed by the suit symbol, `K♥`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses a card from a textual description.
    ///
    /// The description is case-insensitive, the connective word `of` is
    /// ignored, the rank is the first token and the suit the last one:
    ///
    /// ```
    /// # use handcast_cards::{Card, Rank, Suit};
    /// let card = Card::parse("10 of Diamonds").unwrap();
    /// assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    /// ```
    pub fn parse(raw: &str) -> Result<Card, CardError> {
        let text = raw.trim().to_uppercase();
        let mut tokens = text
            .split_whitespace()
            .filter(|t| *t != "OF")
            .collect::<Vec<_>>();

        if tokens.is_empty() {
            return Err(CardError::Format(raw.trim().to_string()));
        }

        // Naive whitespace splitting on inputs like "1 0 of Hearts" breaks
        // a ten into two tokens, stitch them back before the rank lookup.
        if tokens[0] == "1" && tokens.get(1) == Some(&"0") {
            tokens[0] = "10";
            tokens.remove(1);
        }

        // The rank is vetted first so that a lone unrecognized token like
        // "XYZ" reports the rank, not the shape of the string.
        let rank = RANK_TOKENS
            .get(tokens[0])
            .copied()
            .ok_or_else(|| CardError::Rank(tokens[0].to_string()))?;

        if tokens.len() < 2 {
            return Err(CardError::Format(raw.trim().to_string()));
        }

        let suit = SUIT_TOKENS
            .get(tokens[tokens.len() - 1])
            .copied()
            .ok_or_else(|| CardError::Suit(tokens[tokens.len() - 1].to_string()))?;

        Ok(Card::new(rank, suit))
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The rank numeric value, 2 for the deuce up to 14 for the ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
