// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcast poker hand evaluator.
//!
//! This crate classifies a five cards hand and derives the numeric features
//! consumed by the action probability model.
//!
//! To evaluate a hand parse it and use [HandFeatures::eval]:
//!
//! ```
//! # use handcast_eval::*;
//! let hand = Hand::parse(&["10 S", "J S", "Q S", "K S", "A S"]).unwrap();
//!
//! assert_eq!(HandCategory::classify(&hand), HandCategory::RoyalFlush);
//!
//! let features = HandFeatures::eval(&hand);
//! assert_eq!(features.to_vector(), [1.0, 1.0, 5.0, 1.0]);
//! ```
//!
//! The [model] module defines the boundary with the external model, the
//! feature vector layout and the ranked action distribution built from the
//! model raw scores.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod model;
pub use eval::{HandCategory, HandFeatures};
pub use model::{Action, ActionModel, Prediction};

// Reexport cards types.
pub use handcast_cards::{Card, CardError, Deck, Hand, HandError, Rank, Suit};
