use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use skyflap::audio::Audio;
use skyflap::constants::FRAME_INTERVAL_MS;
use skyflap::game::{flap_or_restart, process_tick, FlapOutcome, GameSession};
use skyflap::persistence::HighScore;
use skyflap::ui::{self, Theme};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut session = GameSession::new();
    let mut high = HighScore::load();
    let mut audio = Audio::new();
    let mut theme = Theme::Day;
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let hud = ui::Hud {
                best: high.best,
                theme,
                muted: audio.is_muted(),
            };
            let area = frame.size();
            ui::render_game(frame, area, &session, &hud);
        })?;

        // Poll for input (non-blocking)
        if event::poll(Duration::from_millis(5))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(());
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        match flap_or_restart(&mut session) {
                            FlapOutcome::Flapped => audio.play_flap(),
                            FlapOutcome::Restarted => {}
                        }
                    }
                    KeyCode::Char('m') | KeyCode::Char('M') => {
                        audio.toggle_muted();
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') => {
                        theme = theme.toggled();
                    }
                    _ => {}
                }
            }
        }

        // Simulation tick on a fixed interval (~60 fps)
        if last_frame.elapsed() >= Duration::from_millis(FRAME_INTERVAL_MS) {
            let result = process_tick(&mut session, &mut rng);

            if result.pipes_scored > 0 {
                audio.play_score();
            }

            // Persist the high score at the game-over transition itself,
            // not in the render path. Write failures are non-fatal.
            if result.game_over && high.record(session.score) {
                let _ = high.save();
            }

            last_frame = Instant::now();
        }
    }
}
