//! Errors returned by session operations.
//!
//! All of them are local and leave the session untouched: the caller decides
//! whether to retry on a later tick. There are no fatal errors in the engine.

use thiserror::Error;

use crate::timing::Phase;

/// Error returned when a session rejects a call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    /// The operation is not allowed in the current phase.
    #[error("operation not allowed while {phase}")]
    InvalidState { phase: Phase },

    /// `Move::None` was submitted; it is reserved for timeouts.
    #[error("no move submitted; `None` is reserved for forfeits")]
    InvalidMove,

    /// Tick delta was negative or not finite.
    #[error("invalid tick delta {0}")]
    InvalidDelta(f32),

    /// A configuration value is out of range.
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}

impl SessionError {
    /// Returns true if the caller can simply try again later.
    ///
    /// Configuration errors need a different config, not a retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::InvalidConfig { .. })
    }
}
