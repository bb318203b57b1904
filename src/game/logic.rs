//! Game logic for the flappy bird simulation.
//!
//! All functions here are pure over the session state plus an injected RNG,
//! so the driver and the tests step the simulation the same way.

use super::types::{GameSession, Phase, Pipe};
use crate::constants::*;
use rand::Rng;

/// What a single input gesture did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapOutcome {
    /// The bird received the lift impulse.
    Flapped,
    /// The session was over; a fresh one was started instead.
    Restarted,
}

/// Result of one simulation tick - captures everything that happened.
///
/// The driver uses this to trigger side effects (sound cues, high-score
/// persistence) without coupling them into the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickResult {
    /// Pipes passed this tick (each one fires the score cue).
    pub pipes_scored: u32,
    /// The session transitioned Playing -> GameOver during this tick.
    pub game_over: bool,
}

/// Process the single input gesture: flap while playing, restart while over.
///
/// The impulse replaces the current velocity rather than accumulating.
pub fn flap_or_restart(session: &mut GameSession) -> FlapOutcome {
    if session.is_over() {
        session.reset();
        FlapOutcome::Restarted
    } else {
        session.bird.velocity = LIFT;
        FlapOutcome::Flapped
    }
}

/// Advance the simulation by one frame: bird physics, pipe scrolling,
/// spawning, scoring, and collision detection.
///
/// A finished session never advances; the tick is a no-op until the next
/// restart, so the last frame stays on screen.
pub fn process_tick<R: Rng>(session: &mut GameSession, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if session.is_over() {
        return result;
    }

    update_bird(session);
    result.pipes_scored = update_pipes(session, rng);
    check_collisions(session);

    result.game_over = session.is_over();
    session.frame_count += 1;
    result
}

/// Apply gravity and integrate position. Leaving the vertical world range
/// in either direction ends the session.
fn update_bird(session: &mut GameSession) {
    let bird = &mut session.bird;
    bird.velocity += GRAVITY;
    bird.y += bird.velocity;

    if bird.y + bird.height > WORLD_HEIGHT || bird.y < 0.0 {
        session.phase = Phase::GameOver;
    }
}

/// Spawn, scroll, score, and cull pipes. Returns how many pipes were
/// scored this tick.
fn update_pipes<R: Rng>(session: &mut GameSession, rng: &mut R) -> u32 {
    if session.frame_count % PIPE_SPAWN_INTERVAL == 0 {
        let gap_top = rng.gen_range(PIPE_MIN_GAP_TOP..PIPE_MAX_GAP_TOP);
        session.pipes.push(Pipe {
            x: WORLD_WIDTH,
            gap_top,
            gap_bottom: gap_top + PIPE_GAP,
            scored: false,
        });
    }

    let mut scored = 0;
    for pipe in &mut session.pipes {
        pipe.x -= PIPE_SPEED;

        // Trailing edge of the pipe passed the bird's leading edge.
        if !pipe.scored && pipe.x + PIPE_WIDTH < session.bird.x {
            pipe.scored = true;
            session.score += SCORE_MULTIPLIER;
            scored += 1;
        }
    }

    // Drop pipes fully past the left edge.
    session.pipes.retain(|p| p.x + PIPE_WIDTH > 0.0);

    scored
}

/// Axis-aligned overlap test against every pipe. Any hit ends the session;
/// repeated hits are harmless.
fn check_collisions(session: &mut GameSession) {
    let bird = &session.bird;
    for pipe in &session.pipes {
        let horizontal = bird.x < pipe.x + PIPE_WIDTH && bird.x + bird.width > pipe.x;
        let outside_gap = bird.y < pipe.gap_top || bird.y + bird.height > pipe.gap_bottom;
        if horizontal && outside_gap {
            session.phase = Phase::GameOver;
        }
    }
}
