//! # rps-engine
//!
//! A round-based rock-paper-scissors engine driven by a host frame loop.
//!
//! ## Design Principles
//!
//! 1. **Tick-Driven**: Time only advances through `GameSession::tick`.
//!    The engine never sleeps, blocks, or spawns anything.
//!
//! 2. **Presentation-Agnostic**: The host forwards intents and renders from
//!    `Snapshot`. No labels, sprites, or buttons live here.
//!
//! 3. **Strategy Over Branching**: Opponent behaviour sits behind the
//!    `OpponentStrategy` trait, selected per `StrategyMode`.
//!
//! ## Architecture
//!
//! - **Two-Phase Rounds**: Each round is a selection phase followed by a
//!   result-display phase. Exactly one is active at a time.
//!
//! - **Forfeit on Timeout**: If the selection countdown expires the round
//!   resolves with `Move::None`, which always loses.
//!
//! - **Streak Multipliers**: Consecutive wins double the winner's points per
//!   round; a tie or a win by the other side resets the streak.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, RNG, configuration, errors
//! - `rules`: Round resolution
//! - `strategy`: Opponent strategies
//! - `scoring`: Scores and streaks
//! - `timing`: Countdowns and phases
//! - `session`: The state machine and its snapshot

pub mod core;
pub mod rules;
pub mod strategy;
pub mod scoring;
pub mod timing;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Move, Outcome,
    GameRng,
    SessionConfig, ResetPolicy,
    SessionError,
};

pub use crate::rules::resolve;

pub use crate::strategy::{
    OpponentStrategy, StrategyMode, StrategyTable,
    RandomStrategy, CounterStrategy,
};

pub use crate::scoring::{ScoreKeeper, ScoreState, StreakState};

pub use crate::timing::{Countdown, Phase, RoundTimer, TimerEvent};

pub use crate::session::{GameSession, RoundResult, Snapshot, TickOutcome};
