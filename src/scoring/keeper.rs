//! Score accumulators and streak multipliers.

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

/// Cumulative scores. Never decrease except through a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    pub player: u64,
    pub opponent: u64,
}

/// Streak multipliers for both sides.
///
/// At most one side is above 1 at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreakState {
    pub player: u64,
    pub opponent: u64,
}

impl Default for StreakState {
    fn default() -> Self {
        Self {
            player: 1,
            opponent: 1,
        }
    }
}

/// Applies resolved rounds to scores and streaks.
///
/// A win is worth the winner's current multiplier, after which that
/// multiplier doubles and the loser's drops back to 1. A tie scores nothing
/// and resets both. Doubling and addition saturate at `u64::MAX`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    scores: ScoreState,
    streaks: StreakState,
}

impl ScoreKeeper {
    /// Fresh keeper: zero scores, multipliers at 1.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scores(&self) -> ScoreState {
        self.scores
    }

    #[must_use]
    pub fn streaks(&self) -> StreakState {
        self.streaks
    }

    /// Record a round. Returns the points awarded to the winner (0 on a tie).
    pub fn apply_outcome(&mut self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::PlayerWins => {
                let points = self.streaks.player;
                self.scores.player = self.scores.player.saturating_add(points);
                self.streaks.player = self.streaks.player.saturating_mul(2);
                self.streaks.opponent = 1;
                points
            }
            Outcome::OpponentWins => {
                let points = self.streaks.opponent;
                self.scores.opponent = self.scores.opponent.saturating_add(points);
                self.streaks.opponent = self.streaks.opponent.saturating_mul(2);
                self.streaks.player = 1;
                points
            }
            Outcome::Tie => {
                self.streaks = StreakState::default();
                0
            }
        }
    }

    /// Zero both scores. Streaks are left alone.
    pub fn reset_scores(&mut self) {
        self.scores = ScoreState::default();
    }

    /// Put both multipliers back to 1.
    pub fn reset_streaks(&mut self) {
        self.streaks = StreakState::default();
    }
}
