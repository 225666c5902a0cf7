//! Round resolution.

use crate::core::{Move, Outcome};

/// Decide a round from the player's side.
///
/// - `Move::None` from the player is a forfeit: the opponent wins whatever
///   it played.
/// - Equal moves tie, and so does an opponent that played nothing.
/// - Otherwise the beats-relation decides.
///
/// ```
/// use rps_engine::core::{Move, Outcome};
/// use rps_engine::rules::resolve;
///
/// assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::PlayerWins);
/// assert_eq!(resolve(Move::None, Move::Rock), Outcome::OpponentWins);
/// ```
#[must_use]
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    if !player.is_playable() {
        return Outcome::OpponentWins;
    }

    if player == opponent || !opponent.is_playable() {
        Outcome::Tie
    } else if player.beats(opponent) {
        Outcome::PlayerWins
    } else {
        Outcome::OpponentWins
    }
}
