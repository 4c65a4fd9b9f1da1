// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcast poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use handcast_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and to parse cards and five cards hands from the textual descriptions
//! typed into the front end, `<rank> [OF] <suit>` in any case:
//!
//! ```
//! # use handcast_cards::{Card, Hand, Rank, Suit};
//! let card = Card::parse("king of hearts").unwrap();
//! assert_eq!(card, Card::new(Rank::King, Suit::Hearts));
//! assert_eq!(card.to_string(), "K♥");
//!
//! let hand = Hand::parse(&["2 H", "3 h", "4 Hearts", "5 hearts", "6 OF HEARTS"]).unwrap();
//! assert_eq!(hand.to_string(), "2♥ 3♥ 4♥ 5♥ 6♥");
//! ```
//!
//! Parsing fails on the first card that cannot be decomposed into a rank
//! and a suit token, with an error that identifies the offending card.
//!
//! A [Deck] type is available for shuffling and dealing random hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
mod hand;
pub use deck::{Card, CardError, Deck, Rank, Suit};
pub use hand::{Hand, HandError};
