//! Odds and keep decisions for a five-dice scoring game.
//!
//! Given the dice in play and the rerolls left in a turn, this crate answers how likely
//! each scorecard box is to come good, turns those chances into normalised
//! expected-score features, and suggests which rolled dice to set aside toward a box.
//!
//! - `markov`: transition matrices, their cached powers, per-box probabilities
//! - `features`: expected-score observation vectors
//! - `keep`: greedy keep/reroll selection
//! - `scoring`, `category`, `dice`: the game pieces those build on

pub mod category;
pub mod dice;
pub mod error;
pub mod features;
pub mod keep;
pub mod markov;
pub mod scoring;

pub use category::Category;
pub use dice::FaceCounts;
pub use error::{Error, Result};
pub use features::{ExpectedScoreEngine, FeatureConfig, Observation};
pub use keep::{decide, decide_named, KeepDecision};
pub use markov::{Matrix, MatrixPowerCache, ProbabilityEngine, TransitionKind, UpperDistribution};
pub use scoring::{score, MarkOutcome, ScoreView, Scorecard};
