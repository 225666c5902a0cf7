//! Render-ready view of a session.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Outcome};
use crate::strategy::StrategyMode;

use super::game::RoundResult;

/// Everything the presentation layer needs to draw a frame.
///
/// Taken by value from `GameSession::snapshot`; holding one never affects
/// the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The current selection. `None` outside of a resolution.
    pub player_move: Move,
    /// The opponent's move while a result is shown, else `None`.
    pub opponent_move: Move,
    /// Outcome while a result is shown.
    pub outcome: Option<Outcome>,

    pub player_score: u64,
    pub opponent_score: u64,
    pub player_multiplier: u64,
    pub opponent_multiplier: u64,

    pub selection_time_remaining: f32,
    pub display_time_remaining: f32,
    pub is_showing_result: bool,

    /// Selected mode; the round in progress may still use the previous one.
    pub strategy_mode: StrategyMode,
    pub rounds_played: u64,

    /// The round on screen, including the player's move.
    pub last_round: Option<RoundResult>,
}

impl Snapshot {
    /// Whole seconds left to choose, for a countdown label.
    #[must_use]
    pub fn countdown_label(&self) -> u32 {
        // Float-to-int `as` saturates, so negatives land on 0
        self.selection_time_remaining as u32
    }

    /// Result banner text while a result is shown.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        if self.is_showing_result {
            self.last_round.map(|round| round.to_string())
        } else {
            None
        }
    }
}
