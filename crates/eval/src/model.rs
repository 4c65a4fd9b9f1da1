// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Action model boundary types.
//!
//! The probability model itself is an external collaborator, this module
//! defines what crosses the boundary: the action labels the model scores
//! and the ranked distribution built from its raw scores.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::HandFeatures;

/// A player action scored by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Fold the hand.
    Fold,
    /// Check.
    Check,
    /// Call the current bet.
    Call,
    /// Raise.
    Raise,
    /// Bet all the chips.
    AllIn,
}

impl Action {
    /// All actions in model output order.
    pub const ALL: [Action; 5] = [
        Action::Fold,
        Action::Check,
        Action::Call,
        Action::Raise,
        Action::AllIn,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call => "Call",
            Action::Raise => "Raise",
            Action::AllIn => "All-in",
        };

        write!(f, "{action}")
    }
}

/// A model that scores the five actions for a hand.
pub trait ActionModel {
    /// The raw, not necessarily normalized, scores in [Action::ALL] order.
    fn predict(&self, features: &HandFeatures) -> [f32; 5];
}

/// A ranked action distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    actions: Vec<(Action, f32)>,
}

impl Prediction {
    /// Runs the model on the given features and ranks its output.
    ///
    /// The raw scores are normalized to a probability distribution and
    /// paired with their action, most likely action first.
    pub fn rank<M: ActionModel>(model: &M, features: &HandFeatures) -> Self {
        let scores = model.predict(features);
        let total = scores.iter().sum::<f32>();

        let mut actions = Action::ALL
            .into_iter()
            .zip(scores)
            .map(|(action, score)| {
                let p = if total > 0.0 { score / total } else { 0.0 };
                (action, p)
            })
            .collect::<Vec<_>>();
        actions.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self { actions }
    }

    /// The actions with their probability, most likely first.
    pub fn actions(&self) -> &[(Action, f32)] {
        &self.actions
    }

    /// The most likely action.
    pub fn best(&self) -> Action {
        self.actions[0].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hand;

    /// A model that returns fixed scores.
    struct FixedModel([f32; 5]);

    impl ActionModel for FixedModel {
        fn predict(&self, _features: &HandFeatures) -> [f32; 5] {
            self.0
        }
    }

    fn features() -> HandFeatures {
        let hand = Hand::parse(&["3 H", "3 D", "7 C", "7 S", "9 H"]).unwrap();
        HandFeatures::eval(&hand)
    }

    #[test]
    fn prediction_normalizes_and_sorts() {
        let model = FixedModel([1.0, 4.0, 2.0, 2.0, 1.0]);
        let prediction = Prediction::rank(&model, &features());

        assert_eq!(prediction.best(), Action::Check);
        assert_eq!(prediction.actions()[0], (Action::Check, 0.4));

        let total = prediction.actions().iter().map(|(_, p)| p).sum::<f32>();
        assert!((total - 1.0).abs() < 1e-6);

        // Probabilities are in descending order.
        for pair in prediction.actions().windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn prediction_zero_scores() {
        let model = FixedModel([0.0; 5]);
        let prediction = Prediction::rank(&model, &features());

        assert!(prediction.actions().iter().all(|(_, p)| *p == 0.0));
    }

    #[test]
    fn action_labels() {
        let labels = Action::ALL.map(|a| a.to_string());
        assert_eq!(labels, ["Fold", "Check", "Call", "Raise", "All-in"]);
    }
}
