//! Selection and result-display countdowns.
//!
//! ## Countdown
//!
//! A single countdown that only moves when it is ticked.
//!
//! ## RoundTimer
//!
//! Owns both countdowns and the current `Phase`. Only the countdown of the
//! active phase is advanced, so the two are never running at once.

use serde::{Deserialize, Serialize};

/// Which half of the round is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player's move.
    #[default]
    AwaitingSelection,
    /// A resolved round is on screen.
    ShowingResult,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingSelection => f.write_str("awaiting selection"),
            Phase::ShowingResult => f.write_str("showing result"),
        }
    }
}

/// A countdown of fixed length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    duration: f32,
    remaining: f32,
}

impl Countdown {
    /// A full countdown of `duration` seconds.
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Subtract `delta` and report whether the countdown has run out.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.remaining -= delta;
        self.remaining <= 0.0
    }

    /// Back to full length.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }
}

/// Emitted when the active countdown runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// The player ran out of time to choose.
    SelectionExpired,
    /// The result has been shown long enough.
    DisplayExpired,
}

/// Drives the two phases of a round.
///
/// The timer never changes phase on its own: expiry is reported through
/// `advance` and the owner calls `begin_display` / `begin_selection`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundTimer {
    phase: Phase,
    selection: Countdown,
    display: Countdown,
}

impl RoundTimer {
    /// Start in the selection phase with both countdowns full.
    #[must_use]
    pub fn new(selection_duration: f32, display_duration: f32) -> Self {
        Self {
            phase: Phase::AwaitingSelection,
            selection: Countdown::new(selection_duration),
            display: Countdown::new(display_duration),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn selection_remaining(&self) -> f32 {
        self.selection.remaining()
    }

    #[must_use]
    pub fn display_remaining(&self) -> f32 {
        self.display.remaining()
    }

    /// Advance the active countdown by `delta` seconds.
    ///
    /// Returns the expiry event, if any. The phase is left unchanged.
    pub fn advance(&mut self, delta: f32) -> Option<TimerEvent> {
        match self.phase {
            Phase::AwaitingSelection => {
                self.selection.tick(delta).then_some(TimerEvent::SelectionExpired)
            }
            Phase::ShowingResult => self.display.tick(delta).then_some(TimerEvent::DisplayExpired),
        }
    }

    /// Enter the display phase. Both countdowns restart from full.
    pub fn begin_display(&mut self) {
        self.phase = Phase::ShowingResult;
        self.selection.reset();
        self.display.reset();
    }

    /// Enter the selection phase. Both countdowns restart from full.
    pub fn begin_selection(&mut self) {
        self.phase = Phase::AwaitingSelection;
        self.selection.reset();
        self.display.reset();
    }
}
