//! Skyflap - Terminal Flappy Bird
//!
//! This module exposes the game logic for testing and external use.

pub mod audio;
pub mod constants;
pub mod game;
pub mod persistence;
pub mod ui;
