//! Game session: the orchestrator the presentation layer talks to.
//!
//! ## Round lifecycle
//!
//! ```text
//! AwaitingSelection --submit / selection timeout--> ShowingResult
//!        ^                                               |
//!        +---------------- display timeout --------------+
//! ```
//!
//! Intents go in through `GameSession` methods; state comes out through
//! `Snapshot`. The presentation layer never touches internal fields.

mod game;
mod snapshot;

pub use game::{GameSession, RoundResult, TickOutcome};
pub use snapshot::Snapshot;
pub use crate::timing::Phase;
