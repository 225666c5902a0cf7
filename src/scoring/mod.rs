//! Scores and streak multipliers.
//!
//! `ScoreKeeper` owns both and is the only thing that changes them. Scores
//! persist across rounds until a new game; streaks persist until a tie, a
//! win by the other side, or a reset.

pub mod keeper;

pub use keeper::{ScoreKeeper, ScoreState, StreakState};
