//! Flappy bird data structures.
//!
//! The whole simulation lives in a [`GameSession`]: one bird, the active
//! pipes, the score and frame counters, and the current phase. A session is
//! created fresh on every restart; the persisted high score lives outside it.

use crate::constants::*;

/// The player-controlled bird.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Left edge in world units. Fixed for the lifetime of a session.
    pub x: f64,
    /// Top edge in world units. Row 0 is the ceiling.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in world units per tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            velocity: 0.0,
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A single pipe obstacle (top + bottom segment with a gap).
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge in world units.
    pub x: f64,
    /// Bottom edge of the top segment (the gap starts here).
    pub gap_top: f64,
    /// Top edge of the bottom segment (`gap_top + PIPE_GAP`).
    pub gap_bottom: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub scored: bool,
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Main game state for one play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub bird: Bird,
    /// Active pipes, in spawn order.
    pub pipes: Vec<Pipe>,
    /// Pipes successfully passed this session.
    pub score: u32,
    /// Ticks elapsed this session. Drives pipe spawn cadence.
    pub frame_count: u64,
    pub phase: Phase,
}

impl GameSession {
    /// Create a fresh session in the Playing phase.
    pub fn new() -> Self {
        Self {
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            frame_count: 0,
            phase: Phase::Playing,
        }
    }

    /// Restore all initial values. Equivalent to replacing the session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
