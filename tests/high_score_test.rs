//! Integration test: high-score tracking across sessions.
//!
//! Drives real sessions to game-over and checks that the recorded best
//! follows the spec: a better score replaces it, a worse one leaves it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyflap::game::{flap_or_restart, process_tick, FlapOutcome, GameSession, Phase};
use skyflap::persistence::HighScore;

/// Crash the session by letting the bird free-fall, then record the score
/// the way the driver does at the transition.
fn crash_and_record(session: &mut GameSession, high: &mut HighScore) -> bool {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    loop {
        let result = process_tick(session, &mut rng);
        if result.game_over {
            return high.record(session.score);
        }
        assert!(session.frame_count <= 1_000, "session never ended");
    }
}

#[test]
fn test_better_score_replaces_previous_best() {
    let mut high = HighScore { best: 10 };
    let mut session = GameSession::new();
    session.score = 15;

    let improved = crash_and_record(&mut session, &mut high);
    assert!(improved);
    assert_eq!(high.best, 15);
}

#[test]
fn test_worse_score_leaves_best_untouched() {
    let mut high = HighScore { best: 10 };
    let mut session = GameSession::new();
    session.score = 5;

    let improved = crash_and_record(&mut session, &mut high);
    assert!(!improved);
    assert_eq!(high.best, 10);
}

#[test]
fn test_best_survives_session_reset() {
    let mut high = HighScore { best: 10 };

    // First session beats the best...
    let mut session = GameSession::new();
    session.score = 15;
    crash_and_record(&mut session, &mut high);
    assert_eq!(high.best, 15);

    // ...the restart wipes the session but not the recorded best.
    assert_eq!(flap_or_restart(&mut session), FlapOutcome::Restarted);
    assert_eq!(session.phase, Phase::Playing);
    assert_eq!(session.score, 0);
    assert_eq!(high.best, 15);

    // A weaker second session changes nothing.
    session.score = 5;
    crash_and_record(&mut session, &mut high);
    assert_eq!(high.best, 15);
}

#[test]
fn test_recording_is_idempotent_at_game_over() {
    let mut high = HighScore { best: 3 };
    let mut session = GameSession::new();
    session.score = 8;

    crash_and_record(&mut session, &mut high);
    assert_eq!(high.best, 8);

    // Recording the same finished session again changes nothing.
    assert!(!high.record(session.score));
    assert_eq!(high.best, 8);
}
