use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::ticker::Ticker;
use crate::ui;

/// Main terminal event loop: redraws on every tick and handles key presses
/// in between. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ticker = Ticker::new(Duration::from_millis(settings.timer.tick_ms), Instant::now());

    loop {
        let mut draw_result = Ok(());
        ticker.run_if_due(Instant::now(), |now| {
            let snap = app.snapshot(now);
            draw_result = terminal
                .draw(|f| ui::draw(f, app, &snap, &settings.ui))
                .map(|_| ());
        });
        draw_result?;

        if event::poll(ticker.until_next(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to `app`. Returns true when the user asked to quit.
fn handle_key_event(key: KeyEvent, settings: &config::Settings, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.shutdown(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::Char('s') | KeyCode::Char(',') => app.toggle_settings(),
        KeyCode::Char('x') => app.stop_countdown(),
        KeyCode::Char('m') => app.stop_music(),
        KeyCode::Char('h') | KeyCode::Left => app.move_cursor(-1, 0),
        KeyCode::Char('l') | KeyCode::Right => app.move_cursor(1, 0),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selection(Instant::now()),
        _ => {}
    }

    false
}
