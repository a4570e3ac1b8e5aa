//! Session holder and round lifecycle.

use crate::commentary::CommentaryRequest;
use crate::core::{
    EngineConfig, EngineError, GameRng, Move, RandomSource, Result, RoundRecord, ScoreState,
    SessionState, SpecialModifier,
};
use crate::opponent::{FrequencyCounter, OpponentPolicy};
use crate::rules::RoundEngine;
use crate::special::SpecialRoundScheduler;

use super::phase::RoundPhase;

/// A round whose opponent move is decided but not yet committed.
///
/// The presentation layer may show its "thinking" animation between
/// `Session::begin_round` and `Session::finish_round`; the decision is
/// already made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRound {
    pub user_move: Move,
    pub computer_move: Move,
    /// Modifier the round will be resolved under.
    pub modifier: SpecialModifier,
}

/// Result of a committed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub record: RoundRecord,
    /// Scores after the round.
    pub scores: ScoreState,
    /// Special modifier scheduled after this round, if any.
    pub new_special: Option<SpecialModifier>,
    /// Input for an optional commentator.
    pub commentary_request: CommentaryRequest,
}

impl RoundReport {
    /// Modifier this round consumed (`None` for an ordinary round).
    #[must_use]
    pub fn consumed_modifier(&self) -> SpecialModifier {
        self.record.modifier
    }
}

/// One game session.
///
/// Owns all mutable game state and enforces the round lifecycle:
/// `Idle -> OpponentSelecting -> Resolved -> Idle`. Move submissions
/// arriving while a round is in flight are ignored.
///
/// ## Example
///
/// ```
/// use rps_engine::{EngineConfig, Move, Session};
///
/// let mut session = Session::new(EngineConfig::default().with_seed(7)).unwrap();
/// session.start();
///
/// let report = session.play(Move::Rock).unwrap().unwrap();
/// assert_eq!(report.scores.rounds_played, 1);
/// assert_eq!(session.state().history.len(), 1);
/// ```
pub struct Session {
    config: EngineConfig,
    state: SessionState,
    opponent: Box<dyn OpponentPolicy>,
    opponent_rng: Box<dyn RandomSource>,
    special_rng: Box<dyn RandomSource>,
    scheduler: SpecialRoundScheduler,
    phase: RoundPhase,
    in_flight: Option<PendingRound>,
    active: bool,
}

impl Session {
    /// Create a session with seeded RNG streams.
    ///
    /// Opponent moves and special draws use independent streams derived
    /// from `config.seed`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        let opponent_rng = rng.for_context("opponent");
        let special_rng = rng.for_context("special");
        Self::with_rng(config, Box::new(opponent_rng), Box::new(special_rng))
    }

    /// Create a session with injected random sources.
    pub fn with_rng(
        config: EngineConfig,
        opponent_rng: Box<dyn RandomSource>,
        special_rng: Box<dyn RandomSource>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            state: SessionState::new(config.history_limit),
            opponent: Box::new(FrequencyCounter::from_config(&config)),
            scheduler: SpecialRoundScheduler::from_config(&config),
            config,
            opponent_rng,
            special_rng,
            phase: RoundPhase::Idle,
            in_flight: None,
            active: false,
        })
    }

    /// Replace the opponent policy.
    #[must_use]
    pub fn with_opponent(mut self, opponent: impl OpponentPolicy + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Cheap copy of the current state for display.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Is a round in flight?
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.phase.is_processing()
    }

    /// The round in flight, if any.
    #[must_use]
    pub fn pending_round(&self) -> Option<&PendingRound> {
        self.in_flight.as_ref()
    }

    // === Lifecycle ===

    /// Leave the start screen and accept moves.
    pub fn start(&mut self) {
        log::debug!("session started");
        self.active = true;
    }

    /// Reset and return to the start screen.
    pub fn stop(&mut self) {
        self.reset();
        self.active = false;
        log::debug!("session stopped");
    }

    /// Zero scores and clear history and modifiers.
    ///
    /// A round in flight is discarded.
    pub fn reset(&mut self) {
        self.state.reset();
        self.in_flight = None;
        self.phase = RoundPhase::Idle;
        log::debug!("session reset");
    }

    // === Rounds ===

    /// Start a round: record the user's move and decide the opponent's.
    ///
    /// Returns `Ok(None)` without touching state if a round is already in
    /// flight.
    pub fn begin_round(&mut self, user: Move) -> Result<Option<PendingRound>> {
        if !self.active {
            return Err(EngineError::SessionInactive);
        }
        if !self.phase.accepts_move() {
            log::trace!("ignoring {} while a round is in flight", user);
            return Ok(None);
        }

        let computer_move = self.opponent.choose_move(&self.state.history, self.opponent_rng.as_mut());
        let pending = PendingRound {
            user_move: user,
            computer_move,
            modifier: self.state.active_modifier(),
        };

        self.in_flight = Some(pending);
        self.phase = RoundPhase::OpponentSelecting;
        Ok(Some(pending))
    }

    /// Commit the round in flight.
    ///
    /// Returns `None` if no round was started.
    pub fn finish_round(&mut self) -> Option<RoundReport> {
        let pending = self.in_flight.take()?;

        let record = RoundEngine::play_round(&mut self.state, pending.user_move, pending.computer_move);
        let scores = self.state.scores;
        self.phase = RoundPhase::Resolved;

        log::debug!(
            "round {}: {} vs {} under {} -> {} ({}:{})",
            scores.rounds_played,
            record.user_move,
            record.computer_move,
            record.modifier,
            record.outcome,
            scores.user_score,
            scores.computer_score,
        );

        let new_special = self.scheduler.poll(&mut self.state, self.special_rng.as_mut());

        Some(RoundReport {
            record,
            scores,
            new_special,
            commentary_request: CommentaryRequest::new(&record, &scores),
        })
    }

    /// Start and commit a round in one call.
    ///
    /// Returns `Ok(None)` if a round is already in flight.
    pub fn play(&mut self, user: Move) -> Result<Option<RoundReport>> {
        if self.begin_round(user)?.is_none() {
            return Ok(None);
        }
        Ok(self.finish_round())
    }

    /// Play the move bound to a digit key (`'1'`, `'2'`, `'3'`).
    pub fn play_key(&mut self, key: char) -> Result<Option<RoundReport>> {
        let user = Move::from_key(key)?;
        self.play(user)
    }

    /// Make an announced special modifier pending.
    ///
    /// Called by the presentation layer once its announcement is shown.
    /// While a round is in flight the announcement stays outstanding, so
    /// the round resolves under the modifier it began with.
    pub fn arm_special(&mut self) -> Option<SpecialModifier> {
        if self.phase.is_processing() {
            log::trace!("deferring arm until the round in flight is committed");
            return None;
        }
        let armed = SpecialRoundScheduler::arm(&mut self.state);
        if let Some(modifier) = armed {
            log::debug!("{} round armed", modifier);
        }
        armed
    }
}
