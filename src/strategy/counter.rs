//! Opponent that always counters the player.

use tracing::debug;

use crate::core::{GameRng, Move};

use super::OpponentStrategy;

/// Plays the unique move that beats the player's move.
///
/// On a forfeit (`Move::None`) there is nothing to counter and the round is
/// lost anyway, so it falls back to a uniform random move.
#[derive(Clone, Debug, Default)]
pub struct CounterStrategy;

impl OpponentStrategy for CounterStrategy {
    fn select(&self, player_move: Move, rng: &mut GameRng) -> Move {
        match player_move.defeated_by() {
            Some(counter) => counter,
            None => {
                debug!("nothing to counter on forfeit, picking at random");
                rng.gen_move()
            }
        }
    }
}
