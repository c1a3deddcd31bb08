//! Absorbing Markov chains over dice "progress" states and the probabilities read off them.

pub mod cache;
pub mod matrices;
pub mod probability;

pub use cache::MatrixPowerCache;
pub use matrices::{Matrix, TransitionKind};
pub use probability::{ProbabilityEngine, UpperDistribution};
