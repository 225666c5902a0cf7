//! Core engine types: moves, outcomes, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod choice;
pub mod config;
pub mod error;
pub mod rng;

pub use choice::{Move, Outcome};
pub use config::{ResetPolicy, SessionConfig};
pub use error::SessionError;
pub use rng::GameRng;
