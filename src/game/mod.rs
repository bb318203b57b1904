//! Core flappy bird simulation.
//!
//! A gravity-bound bird is steered through scrolling pipe gaps with a single
//! flap gesture. Hitting a pipe or leaving the vertical world range ends the
//! session; the same gesture then starts a fresh one.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
