//! Session integration tests.
//!
//! These drive whole games through `Session`, covering both play
//! variants, the special-round schedule, and commentary.

use rps_engine::{
    fetch_commentary, Commentary, CommentaryError, CommentaryRequest, Commentator, EngineConfig, EngineError,
    Move, Outcome, RoundEngine, RoundPhase, ScriptedRng, Session, SpecialModifier, SpecialTrigger,
    StubCommentator, UniformOpponent,
};

fn started(config: EngineConfig) -> Session {
    let mut session = Session::new(config).unwrap();
    session.start();
    session
}

fn scripted(config: EngineConfig, opponent: Vec<f64>, special: Vec<f64>) -> Session {
    let mut session = Session::with_rng(
        config,
        Box::new(ScriptedRng::new(opponent)),
        Box::new(ScriptedRng::new(special)),
    )
    .unwrap();
    session.start();
    session
}

/// Quick-play schedule with a purely random opponent.
fn quick_play_random() -> EngineConfig {
    EngineConfig::quick_play().with_heuristic_probability(0.0)
}

// =============================================================================
// Rounds
// =============================================================================

/// Two rock rounds from an empty history: the opponent is random, but each
/// outcome follows from the pair actually played.
#[test]
fn test_outcome_follows_played_pair() {
    let mut session = started(EngineConfig::default().with_seed(3));

    for _ in 0..2 {
        let report = session.play(Move::Rock).unwrap().unwrap();
        let expected = RoundEngine::resolve(Move::Rock, report.record.computer_move, SpecialModifier::None);
        assert_eq!(report.record.outcome, expected);
    }
    assert_eq!(session.state().scores.rounds_played, 2);
}

/// Same seed, same game.
#[test]
fn test_seeded_sessions_are_reproducible() {
    let moves = [Move::Rock, Move::Paper, Move::Rock, Move::Scissors, Move::Rock, Move::Rock, Move::Paper];

    let mut a = started(EngineConfig::adaptive().with_seed(11));
    let mut b = started(EngineConfig::adaptive().with_seed(11));

    for m in moves {
        let ra = a.play(m).unwrap().unwrap();
        let rb = b.play(m).unwrap().unwrap();
        assert_eq!(ra, rb);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

/// Scores add up with the outcomes recorded in an unbounded history.
#[test]
fn test_scores_match_history_without_specials() {
    let config = EngineConfig::adaptive()
        .with_special_trigger(SpecialTrigger::Disabled)
        .with_seed(5);
    let mut session = started(config);

    for i in 0..40 {
        session.play(Move::ALL[i % 3]).unwrap();
    }

    let state = session.state();
    let wins = state.history.iter().filter(|r| r.outcome == Outcome::Win).count() as u32;
    let losses = state.history.iter().filter(|r| r.outcome == Outcome::Loss).count() as u32;

    assert_eq!(state.history.len(), 40);
    assert_eq!(state.scores.user_score, wins);
    assert_eq!(state.scores.computer_score, losses);
    assert_eq!(state.last_outcome, Some(state.history.latest().unwrap().outcome));
}

#[test]
fn test_quick_play_caps_history_at_ten() {
    let mut session = started(EngineConfig::quick_play());
    for _ in 0..15 {
        session.play(Move::Scissors).unwrap();
        session.arm_special();
    }

    assert_eq!(session.state().history.len(), 10);
    assert_eq!(session.state().scores.rounds_played, 15);
}

#[test]
fn test_adaptive_opponent_punishes_repetition() {
    let config = EngineConfig::adaptive()
        .with_heuristic_probability(1.0)
        .with_special_trigger(SpecialTrigger::Disabled);
    let mut session = started(config);

    for _ in 0..3 {
        session.play(Move::Rock).unwrap();
    }
    for _ in 0..5 {
        let report = session.play(Move::Rock).unwrap().unwrap();
        assert_eq!(report.record.computer_move, Move::Paper);
        assert_eq!(report.record.outcome, Outcome::Loss);
    }
}

#[test]
fn test_custom_opponent() {
    let config = EngineConfig::default()
        .with_heuristic_probability(1.0)
        .with_special_trigger(SpecialTrigger::Disabled);
    let mut session = Session::with_rng(
        config,
        Box::new(ScriptedRng::new(vec![0.0])),
        Box::new(ScriptedRng::default()),
    )
    .unwrap()
    .with_opponent(UniformOpponent);
    session.start();

    // Uniform policy ignores history: always the first draw, rock
    for _ in 0..5 {
        let report = session.play(Move::Scissors).unwrap().unwrap();
        assert_eq!(report.record.computer_move, Move::Rock);
    }
}

#[test]
fn test_invalid_key_leaves_state_untouched() {
    let mut session = started(EngineConfig::default());
    let before = session.snapshot();

    let err = session.play_key('q').unwrap_err();
    assert_eq!(err, EngineError::InvalidInput { input: "q".into() });
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.phase(), RoundPhase::Idle);
}

// =============================================================================
// Special Rounds
// =============================================================================

#[test]
fn test_deferred_special_every_fourth_round() {
    // Opponent always rock; special draw always DOUBLE
    let mut session = scripted(quick_play_random(), vec![0.0], vec![0.0]);

    for _ in 0..3 {
        let report = session.play(Move::Paper).unwrap().unwrap();
        assert_eq!(report.new_special, None);
    }

    let fourth = session.play(Move::Paper).unwrap().unwrap();
    assert_eq!(fourth.new_special, Some(SpecialModifier::Double));
    assert_eq!(session.state().announced_special, Some(SpecialModifier::Double));
    assert_eq!(session.state().pending_special, None);

    assert_eq!(session.arm_special(), Some(SpecialModifier::Double));
    assert_eq!(session.state().pending_special, Some(SpecialModifier::Double));

    let fifth = session.play(Move::Paper).unwrap().unwrap();
    assert_eq!(fifth.consumed_modifier(), SpecialModifier::Double);
    assert_eq!(fifth.scores.user_score, 6);
    assert_eq!(session.state().pending_special, None);

    let sixth = session.play(Move::Paper).unwrap().unwrap();
    assert_eq!(sixth.consumed_modifier(), SpecialModifier::None);
    assert_eq!(sixth.scores.user_score, 7);
}

#[test]
fn test_unarmed_announcement_waits() {
    let mut session = scripted(quick_play_random(), vec![0.0], vec![0.5]);

    for _ in 0..4 {
        session.play(Move::Scissors).unwrap();
    }
    assert_eq!(session.state().announced_special, Some(SpecialModifier::Reverse));

    // Played before the announcement is armed: ordinary round
    let fifth = session.play(Move::Scissors).unwrap().unwrap();
    assert_eq!(fifth.consumed_modifier(), SpecialModifier::None);
    assert_eq!(fifth.record.outcome, Outcome::Loss);

    // Round 8 draws nothing new while the announcement is outstanding
    for _ in 0..3 {
        let report = session.play(Move::Scissors).unwrap().unwrap();
        assert_eq!(report.new_special, None);
    }

    session.arm_special();
    let reversed = session.play(Move::Scissors).unwrap().unwrap();
    assert_eq!(reversed.consumed_modifier(), SpecialModifier::Reverse);
    assert_eq!(reversed.record.outcome, Outcome::Win);
}

#[test]
fn test_immediate_special_after_fifth_round() {
    // Opponent always scissors; special draw always STEAL
    let mut session = scripted(EngineConfig::adaptive().with_heuristic_probability(0.0), vec![0.99], vec![0.99]);

    for round in 1..=5 {
        let report = session.play(Move::Paper).unwrap().unwrap();
        let expected = if round == 5 { Some(SpecialModifier::Steal) } else { None };
        assert_eq!(report.new_special, expected);
    }
    assert_eq!(session.state().pending_special, Some(SpecialModifier::Steal));
    assert_eq!(session.state().scores.computer_score, 5);

    let sixth = session.play(Move::Rock).unwrap().unwrap();
    assert_eq!(sixth.consumed_modifier(), SpecialModifier::Steal);
    assert_eq!(sixth.record.outcome, Outcome::Win);
    assert_eq!(sixth.scores.user_score, 1);
    assert_eq!(sixth.scores.computer_score, 4);
}

/// Every scheduled modifier is consumed by exactly one round.
#[test]
fn test_each_special_consumed_once() {
    let config = EngineConfig::adaptive()
        .with_special_trigger(SpecialTrigger::AfterRoundCount { every: 1 })
        .with_seed(99);
    let mut session = started(config);

    let mut scheduled = Vec::new();
    let mut consumed = Vec::new();
    for i in 0..60 {
        let report = session.play(Move::ALL[i % 3]).unwrap().unwrap();
        if report.consumed_modifier().is_special() {
            consumed.push(report.consumed_modifier());
        }
        if let Some(m) = report.new_special {
            scheduled.push(m);
        }
    }

    // The last scheduled modifier is still pending
    assert_eq!(session.state().pending_special, scheduled.last().copied());
    assert_eq!(consumed.as_slice(), &scheduled[..scheduled.len() - 1]);
}

#[test]
fn test_reset_clears_specials() {
    let mut session = scripted(EngineConfig::adaptive(), vec![0.0], vec![0.0]);
    for _ in 0..5 {
        session.play(Move::Rock).unwrap();
    }
    assert!(session.state().pending_special.is_some());

    session.reset();
    assert!(!session.state().has_special_outstanding());
    assert_eq!(session.state().scores.rounds_played, 0);
}

// =============================================================================
// Commentary
// =============================================================================

struct Timeout;

impl Commentator for Timeout {
    fn comment(&self, _request: &CommentaryRequest) -> Result<Commentary, CommentaryError> {
        Err(CommentaryError::Timeout)
    }
}

#[test]
fn test_commentary_never_touches_session() {
    let mut session = started(EngineConfig::default());
    let report = session.play(Move::Paper).unwrap().unwrap();
    let before = session.snapshot();

    assert!(fetch_commentary(&StubCommentator, &report.commentary_request).is_some());
    assert!(fetch_commentary(&Timeout, &report.commentary_request).is_none());

    assert_eq!(session.snapshot(), before);
    assert_eq!(report.commentary_request.user_score, before.scores.user_score);
}
