//! Terminal presentation layer. Nothing in here mutates the simulation.

pub mod common;
pub mod scene;

pub use scene::{render_game, Hud};

use ratatui::style::Color;

/// Day/night background selection. A pure display concern toggled by the
/// player; the simulation never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    /// Sky color behind the playfield.
    pub fn sky(self) -> Color {
        match self {
            Theme::Day => Color::Rgb(112, 197, 206),
            Theme::Night => Color::Rgb(0, 31, 63),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Day.toggled(), Theme::Night);
        assert_eq!(Theme::Night.toggled(), Theme::Day);
        assert_ne!(Theme::Day.sky(), Theme::Night.sky());
    }
}
