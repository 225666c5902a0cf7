//! Round rules.
//!
//! `resolve` is the only rule in the game: a pure, total function from the
//! two moves of a round to its `Outcome`. Scoring and timing live elsewhere.

pub mod resolver;

pub use resolver::resolve;
