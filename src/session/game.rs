//! The round state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, Move, Outcome, ResetPolicy, SessionConfig, SessionError};
use crate::rules::resolve;
use crate::scoring::ScoreKeeper;
use crate::strategy::{OpponentStrategy, StrategyMode, StrategyTable};
use crate::timing::{Phase, RoundTimer, TimerEvent};

use super::snapshot::Snapshot;

/// One resolved round, as shown during the display phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// `Move::None` on a forfeit.
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
    /// Multiplier in effect when the round was won; 0 on a tie.
    pub points_awarded: u64,
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Outcome::PlayerWins => write!(f, "Player wins! +{}", self.points_awarded),
            Outcome::OpponentWins => write!(f, "AI wins! +{}", self.points_awarded),
            Outcome::Tie => f.write_str("TIE!"),
        }
    }
}

/// What a call to `GameSession::tick` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active countdown is still running.
    Idle,
    /// The selection countdown ran out and the round was forfeited.
    Forfeited(RoundResult),
    /// The result window closed and a new round began.
    NextRound,
}

/// A rock-paper-scissors game driven by the host's frame loop.
///
/// The host forwards intents (`submit_player_move`, `set_strategy_mode`,
/// `reset_game`), calls `tick` once per frame with the elapsed time, and
/// renders from `snapshot`. Every call runs to completion and resolves at
/// most one round.
///
/// ```
/// use rps_engine::core::{Move, Outcome, SessionConfig};
/// use rps_engine::session::GameSession;
/// use rps_engine::strategy::StrategyMode;
///
/// let config = SessionConfig::new().with_mode(StrategyMode::AlwaysCounterPlayer);
/// let mut session = GameSession::new(config).unwrap();
///
/// let result = session.submit_player_move(Move::Rock).unwrap();
/// assert_eq!(result.opponent_move, Move::Paper);
/// assert_eq!(result.outcome, Outcome::OpponentWins);
/// assert!(session.snapshot().is_showing_result);
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    timer: RoundTimer,
    keeper: ScoreKeeper,
    strategies: StrategyTable,
    /// Mode the current round plays with.
    mode: StrategyMode,
    /// Mode picked by the host; becomes `mode` when the next round begins.
    pending_mode: StrategyMode,
    rng: GameRng,

    player_move: Move,
    opponent_move: Move,
    outcome: Option<Outcome>,
    last_round: Option<RoundResult>,
    rounds_played: u64,
}

impl GameSession {
    /// Start a session in the selection phase.
    ///
    /// Fails if the configured countdowns are not strictly positive.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), mode = %config.initial_mode, "session started");

        Ok(Self {
            timer: RoundTimer::new(config.selection_duration, config.display_duration),
            keeper: ScoreKeeper::new(),
            strategies: StrategyTable::new(),
            mode: config.initial_mode,
            pending_mode: config.initial_mode,
            rng,
            player_move: Move::None,
            opponent_move: Move::None,
            outcome: None,
            last_round: None,
            rounds_played: 0,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.timer.phase()
    }

    /// The mode most recently selected by the host.
    #[must_use]
    pub fn strategy_mode(&self) -> StrategyMode {
        self.pending_mode
    }

    /// The mode the current round resolves with.
    #[must_use]
    pub fn active_strategy_mode(&self) -> StrategyMode {
        self.mode
    }

    /// Play a move and resolve the round immediately.
    ///
    /// Rejected with `InvalidMove` for `Move::None` and with `InvalidState`
    /// while a result is on screen. A rejected call changes nothing.
    pub fn submit_player_move(&mut self, player_move: Move) -> Result<RoundResult, SessionError> {
        if !player_move.is_playable() {
            debug!("rejected explicit empty move");
            return Err(SessionError::InvalidMove);
        }

        let phase = self.timer.phase();
        if phase != Phase::AwaitingSelection {
            debug!(%player_move, %phase, "rejected move outside selection phase");
            return Err(SessionError::InvalidState { phase });
        }

        Ok(self.resolve_round(player_move))
    }

    /// Advance the active countdown by `delta` seconds.
    ///
    /// Time left over after an expiry is dropped, so one tick makes at most
    /// one transition.
    pub fn tick(&mut self, delta: f32) -> Result<TickOutcome, SessionError> {
        if !(delta.is_finite() && delta >= 0.0) {
            return Err(SessionError::InvalidDelta(delta));
        }

        match self.timer.advance(delta) {
            None => Ok(TickOutcome::Idle),
            Some(TimerEvent::SelectionExpired) => {
                debug!("selection countdown expired");
                Ok(TickOutcome::Forfeited(self.resolve_round(Move::None)))
            }
            Some(TimerEvent::DisplayExpired) => {
                self.begin_round();
                Ok(TickOutcome::NextRound)
            }
        }
    }

    /// Change the opponent strategy starting with the next round.
    ///
    /// The round in progress keeps the strategy it started with.
    pub fn set_strategy_mode(&mut self, mode: StrategyMode) {
        if mode != self.pending_mode {
            info!(from = %self.pending_mode, to = %mode, "strategy mode changed");
        }
        self.pending_mode = mode;
    }

    /// Flip between the two strategies. Returns the newly selected mode.
    pub fn toggle_strategy_mode(&mut self) -> StrategyMode {
        self.set_strategy_mode(self.pending_mode.toggled());
        self.pending_mode
    }

    /// Use a custom strategy whenever `mode` is active.
    pub fn override_strategy(
        &mut self,
        mode: StrategyMode,
        strategy: impl OpponentStrategy + 'static,
    ) {
        self.strategies.set(mode, Box::new(strategy));
    }

    /// Start a new game. The strategy mode is kept.
    ///
    /// With `ResetPolicy::ClearOnly` scores and streaks are cleared and a
    /// fresh selection phase begins; returns `None`. With
    /// `ResetPolicy::ResolveForfeit` only scores are cleared and a forfeit
    /// round is resolved straight away; returns that round.
    pub fn reset_game(&mut self) -> Option<RoundResult> {
        info!(policy = ?self.config.reset_policy, "game reset");

        self.keeper.reset_scores();
        self.rounds_played = 0;

        match self.config.reset_policy {
            ResetPolicy::ClearOnly => {
                self.keeper.reset_streaks();
                self.begin_round();
                None
            }
            ResetPolicy::ResolveForfeit => Some(self.resolve_round(Move::None)),
        }
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let scores = self.keeper.scores();
        let streaks = self.keeper.streaks();

        Snapshot {
            player_move: self.player_move,
            opponent_move: self.opponent_move,
            outcome: self.outcome,
            player_score: scores.player,
            opponent_score: scores.opponent,
            player_multiplier: streaks.player,
            opponent_multiplier: streaks.opponent,
            selection_time_remaining: self.timer.selection_remaining(),
            display_time_remaining: self.timer.display_remaining(),
            is_showing_result: self.timer.phase() == Phase::ShowingResult,
            strategy_mode: self.pending_mode,
            rounds_played: self.rounds_played,
            last_round: self.last_round,
        }
    }

    fn resolve_round(&mut self, player_move: Move) -> RoundResult {
        let opponent_move = self.strategies.get(self.mode).select(player_move, &mut self.rng);
        let outcome = resolve(player_move, opponent_move);
        let points_awarded = self.keeper.apply_outcome(outcome);

        let result = RoundResult {
            player_move,
            opponent_move,
            outcome,
            points_awarded,
        };

        self.timer.begin_display();
        self.opponent_move = opponent_move;
        self.outcome = Some(outcome);
        self.player_move = Move::None;
        self.last_round = Some(result);
        self.rounds_played = self.rounds_played.saturating_add(1);

        debug!(
            %player_move,
            %opponent_move,
            ?outcome,
            points_awarded,
            mode = %self.mode,
            "round resolved"
        );

        result
    }

    fn begin_round(&mut self) {
        self.mode = self.pending_mode;
        self.timer.begin_selection();
        self.player_move = Move::None;
        self.opponent_move = Move::None;
        self.outcome = None;
        self.last_round = None;
        debug!(round = self.rounds_played + 1, "awaiting selection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always plays the move the player's move beats.
    struct Loser;

    impl OpponentStrategy for Loser {
        fn select(&self, player_move: Move, rng: &mut GameRng) -> Move {
            player_move.defeats().unwrap_or_else(|| rng.gen_move())
        }
    }

    fn session(mode: StrategyMode) -> GameSession {
        GameSession::new(SessionConfig::new().with_mode(mode).with_seed(42)).unwrap()
    }

    #[test]
    fn test_fresh_session() {
        let s = session(StrategyMode::Random);
        let snap = s.snapshot();

        assert_eq!(s.phase(), Phase::AwaitingSelection);
        assert_eq!(snap.player_move, Move::None);
        assert_eq!(snap.opponent_move, Move::None);
        assert_eq!(snap.outcome, None);
        assert_eq!(snap.selection_time_remaining, 11.0);
        assert_eq!(snap.display_time_remaining, 2.0);
        assert!(!snap.is_showing_result);
        assert_eq!(snap.rounds_played, 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GameSession::new(SessionConfig::new().with_selection_duration(0.0)).unwrap_err();
        assert!(matches!(err, SessionError::InvalidConfig { .. }));
    }

    #[test]
    fn test_submit_resolves_immediately() {
        let mut s = session(StrategyMode::AlwaysCounterPlayer);
        let result = s.submit_player_move(Move::Scissors).unwrap();

        assert_eq!(result.opponent_move, Move::Rock);
        assert_eq!(result.outcome, Outcome::OpponentWins);
        assert_eq!(result.points_awarded, 1);
        assert_eq!(s.phase(), Phase::ShowingResult);

        let snap = s.snapshot();
        assert_eq!(snap.player_move, Move::None);
        assert_eq!(snap.opponent_move, Move::Rock);
        assert_eq!(snap.outcome, Some(Outcome::OpponentWins));
        assert_eq!(snap.last_round, Some(result));
        assert_eq!(snap.rounds_played, 1);
    }

    #[test]
    fn test_submit_none_rejected() {
        let mut s = session(StrategyMode::Random);
        assert_eq!(s.submit_player_move(Move::None), Err(SessionError::InvalidMove));
        assert_eq!(s.phase(), Phase::AwaitingSelection);
        assert_eq!(s.snapshot().rounds_played, 0);
    }

    #[test]
    fn test_submit_while_showing_rejected() {
        let mut s = session(StrategyMode::AlwaysCounterPlayer);
        s.submit_player_move(Move::Rock).unwrap();
        let before = s.snapshot();

        assert_eq!(
            s.submit_player_move(Move::Paper),
            Err(SessionError::InvalidState {
                phase: Phase::ShowingResult
            })
        );
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_bad_delta_rejected() {
        let mut s = session(StrategyMode::Random);
        assert_eq!(s.tick(-0.1), Err(SessionError::InvalidDelta(-0.1)));
        assert!(matches!(s.tick(f32::NAN), Err(SessionError::InvalidDelta(_))));
        assert!(s.tick(f32::INFINITY).is_err());
        assert_eq!(s.snapshot().selection_time_remaining, 11.0);
    }

    #[test]
    fn test_long_tick_makes_one_transition() {
        let mut s = session(StrategyMode::Random);
        // Far past both countdowns: only the forfeit happens
        let outcome = s.tick(100.0).unwrap();
        assert!(matches!(outcome, TickOutcome::Forfeited(_)));
        assert_eq!(s.phase(), Phase::ShowingResult);
        assert_eq!(s.snapshot().display_time_remaining, 2.0);
    }

    #[test]
    fn test_mode_change_applies_to_next_resolution() {
        let mut s = session(StrategyMode::Random);
        s.override_strategy(StrategyMode::Random, Loser);

        let first = s.submit_player_move(Move::Rock).unwrap();
        assert_eq!(first.outcome, Outcome::PlayerWins);

        // Switching mid-display leaves the shown round alone
        assert_eq!(s.toggle_strategy_mode(), StrategyMode::AlwaysCounterPlayer);
        assert_eq!(s.snapshot().last_round, Some(first));

        s.tick(2.5).unwrap();
        let second = s.submit_player_move(Move::Rock).unwrap();
        assert_eq!(second.opponent_move, Move::Paper);
        assert_eq!(second.outcome, Outcome::OpponentWins);
    }

    #[test]
    fn test_mode_change_mid_selection_waits_for_next_round() {
        let mut s = session(StrategyMode::Random);
        s.override_strategy(StrategyMode::Random, Loser);

        s.tick(5.0).unwrap();
        s.set_strategy_mode(StrategyMode::AlwaysCounterPlayer);
        assert_eq!(s.strategy_mode(), StrategyMode::AlwaysCounterPlayer);
        assert_eq!(s.active_strategy_mode(), StrategyMode::Random);

        // Round already under way: still the old strategy
        let current = s.submit_player_move(Move::Rock).unwrap();
        assert_eq!(current.opponent_move, Move::Scissors);
        assert_eq!(current.outcome, Outcome::PlayerWins);

        s.tick(2.0).unwrap();
        assert_eq!(s.active_strategy_mode(), StrategyMode::AlwaysCounterPlayer);

        let next = s.submit_player_move(Move::Rock).unwrap();
        assert_eq!(next.opponent_move, Move::Paper);
        assert_eq!(next.outcome, Outcome::OpponentWins);
    }

    #[test]
    fn test_reset_clear_only() {
        let mut s = session(StrategyMode::Random);
        s.override_strategy(StrategyMode::Random, Loser);
        s.submit_player_move(Move::Rock).unwrap();
        s.tick(3.0).unwrap();
        s.submit_player_move(Move::Paper).unwrap();

        assert_eq!(s.reset_game(), None);

        let snap = s.snapshot();
        assert_eq!(snap.player_score, 0);
        assert_eq!(snap.opponent_score, 0);
        assert_eq!(snap.player_multiplier, 1);
        assert_eq!(snap.opponent_multiplier, 1);
        assert!(!snap.is_showing_result);
        assert_eq!(snap.outcome, None);
        assert_eq!(snap.last_round, None);
        assert_eq!(snap.rounds_played, 0);
        assert_eq!(snap.strategy_mode, StrategyMode::Random);
    }

    #[test]
    fn test_reset_resolve_forfeit() {
        let config = SessionConfig::new()
            .with_seed(1)
            .with_reset_policy(ResetPolicy::ResolveForfeit);
        let mut s = GameSession::new(config).unwrap();

        // Build an opponent streak of 2 wins
        s.tick(11.0).unwrap();
        s.tick(2.0).unwrap();
        s.tick(11.0).unwrap();
        assert_eq!(s.snapshot().opponent_multiplier, 4);

        let forfeit = s.reset_game().unwrap();
        assert_eq!(forfeit.player_move, Move::None);
        assert_eq!(forfeit.outcome, Outcome::OpponentWins);
        assert_eq!(forfeit.points_awarded, 4);

        let snap = s.snapshot();
        assert_eq!(snap.player_score, 0);
        assert_eq!(snap.opponent_score, 4);
        assert_eq!(snap.opponent_multiplier, 8);
        assert!(snap.is_showing_result);
        assert_eq!(snap.rounds_played, 1);
    }

    #[test]
    fn test_round_result_banner() {
        let win = RoundResult {
            player_move: Move::Rock,
            opponent_move: Move::Scissors,
            outcome: Outcome::PlayerWins,
            points_awarded: 4,
        };
        assert_eq!(win.to_string(), "Player wins! +4");

        let loss = RoundResult {
            player_move: Move::None,
            opponent_move: Move::Paper,
            outcome: Outcome::OpponentWins,
            points_awarded: 1,
        };
        assert_eq!(loss.to_string(), "AI wins! +1");

        let tie = RoundResult {
            player_move: Move::Paper,
            opponent_move: Move::Paper,
            outcome: Outcome::Tie,
            points_awarded: 0,
        };
        assert_eq!(tie.to_string(), "TIE!");
    }
}
