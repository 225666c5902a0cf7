//! Uniform random opponent.

use crate::core::{GameRng, Move};

use super::OpponentStrategy;

/// Picks uniformly from the playable moves, ignoring the player.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl OpponentStrategy for RandomStrategy {
    fn select(&self, _player_move: Move, rng: &mut GameRng) -> Move {
        rng.gen_move()
    }
}
