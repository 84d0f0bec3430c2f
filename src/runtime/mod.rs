use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{PlaybackController, open_engine};
use crate::library::discover;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();
    log::info!("yintimer starting up");

    let settings = settings::load_settings();

    let dir = settings.music_dir(env::args_os().nth(1).map(PathBuf::from));
    let catalog = discover(&dir, &settings.library);
    let presets = startup::load_presets(&settings.presets);
    let playback = PlaybackController::new(open_engine(&settings.audio));

    let mut app = App::new(presets, catalog, playback);
    app.set_music_dir(dir);
    startup::attach_keep_awake(&mut app, &settings.awake);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("yintimer shutting down");
    run_result
}
