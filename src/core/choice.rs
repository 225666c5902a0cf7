//! Moves and the cyclic beats-relation between them.
//!
//! ## Move
//!
//! The three playable moves plus `Move::None`, the "no selection" sentinel.
//! `None` is what a round resolves with when the selection countdown
//! expires, and it sits outside the beats-relation entirely.
//!
//! ## Outcome
//!
//! The result of a single round, always seen from the player's side.

use serde::{Deserialize, Serialize};

/// A move in a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// No selection yet, or a forfeited round.
    #[default]
    None,
}

impl Move {
    /// The moves a player or opponent can actually make.
    pub const PLAYABLE: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Whether this is one of the three playable moves.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Move::None)
    }

    /// Check if `self` beats `other`.
    ///
    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    /// Always false when either side is `Move::None`.
    ///
    /// ```
    /// use rps_engine::core::Move;
    ///
    /// assert!(Move::Rock.beats(Move::Scissors));
    /// assert!(!Move::Scissors.beats(Move::Rock));
    /// assert!(!Move::Rock.beats(Move::Rock));
    /// ```
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// The unique move that beats this one.
    ///
    /// Returns `None` for `Move::None`.
    #[must_use]
    pub const fn defeated_by(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Paper),
            Move::Paper => Some(Move::Scissors),
            Move::Scissors => Some(Move::Rock),
            Move::None => None,
        }
    }

    /// The unique move this one beats.
    ///
    /// Returns `None` for `Move::None`.
    #[must_use]
    pub const fn defeats(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Paper => Some(Move::Rock),
            Move::Scissors => Some(Move::Paper),
            Move::None => None,
        }
    }

    /// Lowercase name, matching the sprite names a renderer would use.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::None => "none",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    PlayerWins,
    OpponentWins,
}

impl Outcome {
    /// The same round seen from the other side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Outcome::Tie => Outcome::Tie,
            Outcome::PlayerWins => Outcome::OpponentWins,
            Outcome::OpponentWins => Outcome::PlayerWins,
        }
    }
}
