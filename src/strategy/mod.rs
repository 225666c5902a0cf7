//! Opponent strategies.
//!
//! Strategies are trait-based so new AI modes can be added without touching
//! the resolver or the session:
//! - `RandomStrategy`: uniform over the playable moves
//! - `CounterStrategy`: always plays whatever beats the player's move
//!
//! A `StrategyTable` holds one strategy per `StrategyMode`; the session looks
//! up the active mode each time a round resolves.

mod counter;
mod random;

pub use counter::CounterStrategy;
pub use random::RandomStrategy;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Move};

/// Which strategy the opponent uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyMode {
    /// Uniformly random moves.
    #[default]
    Random,
    /// Always counter the player's move.
    AlwaysCounterPlayer,
}

impl StrategyMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            StrategyMode::Random => StrategyMode::AlwaysCounterPlayer,
            StrategyMode::AlwaysCounterPlayer => StrategyMode::Random,
        }
    }
}

impl std::fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyMode::Random => f.write_str("random"),
            StrategyMode::AlwaysCounterPlayer => f.write_str("always-counter"),
        }
    }
}

/// Policy for choosing the opponent's move.
pub trait OpponentStrategy: Send + Sync {
    /// Choose the opponent's move given the player's move.
    ///
    /// `player_move` is `Move::None` on a forfeit. Implementations must
    /// always return a playable move.
    fn select(&self, player_move: Move, rng: &mut GameRng) -> Move;
}

/// One strategy per mode.
pub struct StrategyTable {
    random: Box<dyn OpponentStrategy>,
    counter: Box<dyn OpponentStrategy>,
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self {
            random: Box::new(RandomStrategy),
            counter: Box::new(CounterStrategy),
        }
    }
}

impl StrategyTable {
    /// Table with the built-in strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the strategy for a mode.
    #[must_use]
    pub fn get(&self, mode: StrategyMode) -> &dyn OpponentStrategy {
        match mode {
            StrategyMode::Random => self.random.as_ref(),
            StrategyMode::AlwaysCounterPlayer => self.counter.as_ref(),
        }
    }

    /// Replace the strategy used for a mode.
    pub fn set(&mut self, mode: StrategyMode, strategy: Box<dyn OpponentStrategy>) {
        match mode {
            StrategyMode::Random => self.random = strategy,
            StrategyMode::AlwaysCounterPlayer => self.counter = strategy,
        }
    }
}

impl std::fmt::Debug for StrategyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyTable").finish_non_exhaustive()
    }
}
