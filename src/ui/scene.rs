//! Rendering for the game screen.
//!
//! The simulation runs in a fixed 400x600 world; every terminal cell is
//! mapped back into world coordinates so the playfield scales with the
//! window while the game logic never sees the display size.

use crate::constants::{PIPE_WIDTH, WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::GameSession;
use crate::ui::common::{render_game_over_banner, render_status_bar};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Display-only state that lives outside the session: the persisted best
/// score, the theme toggle, and the mute flag.
pub struct Hud {
    pub best: u32,
    pub theme: Theme,
    pub muted: bool,
}

/// Render the whole game screen: playfield, status bar, game-over banner.
pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession, hud: &Hud) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyflap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Playfield (top) + status bar (bottom 2 lines)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_playfield(frame, chunks[0], session, hud.theme);
    render_status_bar_content(frame, chunks[1], session, hud);

    if session.is_over() {
        render_game_over_banner(
            frame,
            chunks[0],
            "GAME OVER",
            &format!("Score: {}   Best: {}", session.score, hud.best),
            "[Space] Restart",
        );
    }
}

/// Render the playfield with bird and pipes.
fn render_playfield(frame: &mut Frame, area: Rect, session: &GameSession, theme: Theme) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let sky = Style::default().bg(theme.sky());
    let pipe_style = Style::default().fg(Color::Green).bg(theme.sky());
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .bg(theme.sky())
        .add_modifier(Modifier::BOLD);

    // Bird glyph follows the current velocity.
    let bird_char = if session.bird.velocity < -2.0 {
        "▲"
    } else if session.bird.velocity > 6.0 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        // Cell centers mapped back into world coordinates.
        let world_y = (display_row as f64 + 0.5) * WORLD_HEIGHT / height as f64;

        let mut spans = Vec::with_capacity(width);
        for display_col in 0..width {
            let world_x = (display_col as f64 + 0.5) * WORLD_WIDTH / width as f64;

            if covers_bird(session, world_x, world_y) {
                spans.push(Span::styled(bird_char, bird_style));
            } else if covers_pipe(session, world_x, world_y) {
                spans.push(Span::styled("█", pipe_style));
            } else {
                spans.push(Span::styled(" ", sky));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn covers_bird(session: &GameSession, world_x: f64, world_y: f64) -> bool {
    let bird = &session.bird;
    world_x >= bird.x
        && world_x < bird.x + bird.width
        && world_y >= bird.y
        && world_y < bird.y + bird.height
}

fn covers_pipe(session: &GameSession, world_x: f64, world_y: f64) -> bool {
    session.pipes.iter().any(|pipe| {
        world_x >= pipe.x
            && world_x < pipe.x + PIPE_WIDTH
            && (world_y < pipe.gap_top || world_y >= pipe.gap_bottom)
    })
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession, hud: &Hud) {
    let sound = if hud.muted { "Sound off" } else { "Sound on" };
    let controls: [(&str, &str); 4] = [
        ("[Space]", "Flap"),
        ("[N]", "Night"),
        ("[M]", sound),
        ("[Q]", "Quit"),
    ];

    if session.is_over() {
        render_status_bar(frame, area, "Crashed! Tap to restart.", Color::Red, &controls);
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}   High: {}", session.score, hud.best),
            Color::Green,
            &controls,
        );
    }
}
