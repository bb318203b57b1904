// Game timing constants
pub const FRAME_INTERVAL_MS: u64 = 16;

// Logical world dimensions (fixed resolution, scaled at render time)
pub const WORLD_WIDTH: f64 = 400.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Bird constants
pub const BIRD_START_X: f64 = 80.0;
pub const BIRD_START_Y: f64 = 200.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const GRAVITY: f64 = 0.6;
pub const LIFT: f64 = -10.0;

// Pipe constants
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_GAP: f64 = 140.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_SPAWN_INTERVAL: u64 = 90;
pub const PIPE_MIN_GAP_TOP: f64 = 50.0;
pub const PIPE_MAX_GAP_TOP: f64 = 250.0;

// Scoring constants
pub const SCORE_MULTIPLIER: u32 = 1;

// Save system constants
pub const HIGH_SCORE_FILE: &str = "high_score.json";
