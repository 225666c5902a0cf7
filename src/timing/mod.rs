//! Round timing.
//!
//! Time only moves when the host hands in a frame delta. Nothing here
//! sleeps or blocks.

pub mod timer;

pub use timer::{Countdown, Phase, RoundTimer, TimerEvent};
