//! Session configuration.
//!
//! The presentation layer builds a `SessionConfig` at startup:
//! - Countdown lengths for the selection and result-display phases
//! - The opponent strategy to start with
//! - What `reset_game` does
//! - An optional RNG seed for reproducible opponents

use serde::{Deserialize, Serialize};

use super::error::SessionError;
use crate::strategy::StrategyMode;

/// Default selection countdown, in seconds.
pub const DEFAULT_SELECTION_DURATION: f32 = 11.0;

/// Default result-display countdown, in seconds.
pub const DEFAULT_DISPLAY_DURATION: f32 = 2.0;

/// What `GameSession::reset_game` does besides zeroing scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetPolicy {
    /// Zero scores and streaks, then start a fresh selection phase.
    #[default]
    ClearOnly,
    /// Zero scores only, then resolve a forfeit round immediately.
    ///
    /// Streak multipliers survive the reset, so the forfeit can award the
    /// opponent more than one point.
    ResolveForfeit,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds the player has to pick a move.
    pub selection_duration: f32,

    /// Seconds a resolved round stays on screen.
    pub display_duration: f32,

    /// Strategy used until the mode is changed.
    pub initial_mode: StrategyMode,

    /// Behaviour of `reset_game`.
    pub reset_policy: ResetPolicy,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            selection_duration: DEFAULT_SELECTION_DURATION,
            display_duration: DEFAULT_DISPLAY_DURATION,
            initial_mode: StrategyMode::Random,
            reset_policy: ResetPolicy::ClearOnly,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a config with the default timings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection countdown length.
    #[must_use]
    pub fn with_selection_duration(mut self, seconds: f32) -> Self {
        self.selection_duration = seconds;
        self
    }

    /// Set the result-display countdown length.
    #[must_use]
    pub fn with_display_duration(mut self, seconds: f32) -> Self {
        self.display_duration = seconds;
        self
    }

    /// Set the starting strategy.
    #[must_use]
    pub fn with_mode(mut self, mode: StrategyMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Set the reset policy.
    #[must_use]
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Set a deterministic seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that both countdowns are finite and strictly positive.
    ///
    /// A zero-length countdown would expire on `tick(0.0)`.
    pub fn validate(&self) -> Result<(), SessionError> {
        check_duration("selection_duration", self.selection_duration)?;
        check_duration("display_duration", self.display_duration)
    }
}

fn check_duration(field: &'static str, value: f32) -> Result<(), SessionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SessionError::InvalidConfig { field, value })
    }
}
