//! Application model types: `App`, `Focus`, `AppEvent` and `Snapshot`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::audio::{PlaybackController, PlaybackState, Transition};
use crate::countdown::{CountdownError, Session};
use crate::library::{Catalog, TrackId};
use crate::presets::{self, PresetError, PresetRegistry};

/// Which part of the screen receives navigation keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Presets,
    Tracks,
    Settings,
}

/// State changes announced to subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    CountdownStarted { minutes: u32 },
    CountdownStopped,
    PresetsChanged(Vec<u32>),
    TrackStarted(TrackId),
    TrackStopped(TrackId),
    PlaybackFailed(TrackId),
}

/// Values the renderer pulls on each tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Countdown progress; `None` when idle or ended.
    pub countdown: Option<f64>,
    pub remaining: Option<Duration>,
    /// A countdown was started and has run out.
    pub expired: bool,
    pub playing: PlaybackState,
    /// Progress through the current pass of the playing track.
    pub track_progress: Option<f64>,
}

type Observer = Box<dyn FnMut(&AppEvent)>;

/// The main application model.
pub struct App {
    pub session: Session,
    pub presets: PresetRegistry,
    pub catalog: Catalog,
    pub playback: PlaybackController,
    pub music_dir: Option<PathBuf>,

    pub focus: Focus,
    pub settings_open: bool,
    /// Index into the preset bar; `presets.len()` is the Stop button.
    pub preset_cursor: usize,
    /// (row, column) in the track grid.
    pub track_cursor: (usize, usize),
    /// Index into `presets::choices()`.
    pub settings_cursor: usize,

    choices: Vec<u32>,
    observers: Vec<Observer>,
}

impl App {
    pub fn new(presets: PresetRegistry, catalog: Catalog, playback: PlaybackController) -> Self {
        Self {
            session: Session::default(),
            presets,
            catalog,
            playback,
            music_dir: None,
            focus: Focus::Presets,
            settings_open: false,
            preset_cursor: 0,
            track_cursor: (0, 0),
            settings_cursor: 0,
            choices: presets::choices(),
            observers: Vec::new(),
        }
    }

    /// Record the music folder named in the empty-catalog hint.
    pub fn set_music_dir(&mut self, dir: PathBuf) {
        self.music_dir = Some(dir);
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&AppEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: AppEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    pub fn choices(&self) -> &[u32] {
        &self.choices
    }

    /// Start (or restart) the countdown for `minutes`.
    pub fn start_countdown(&mut self, minutes: u32, now: Instant) -> Result<(), CountdownError> {
        self.session.start_minutes(now, minutes)?;
        log::info!("countdown started: {minutes} min");
        self.emit(AppEvent::CountdownStarted { minutes });
        Ok(())
    }

    pub fn stop_countdown(&mut self) {
        if self.session.is_idle() {
            return;
        }
        self.session.stop();
        log::info!("countdown stopped");
        self.emit(AppEvent::CountdownStopped);
    }

    pub fn toggle_preset(&mut self, minutes: u32) -> Result<(), PresetError> {
        let presets = self.presets.toggle(minutes)?.to_vec();
        self.preset_cursor = self.preset_cursor.min(presets.len());
        self.emit(AppEvent::PresetsChanged(presets));
        Ok(())
    }

    /// Tap on a track button.
    pub fn activate_track(&mut self, id: TrackId) {
        let Some(track) = self.catalog.track(id) else {
            return;
        };
        let events = match self.playback.activate(track) {
            Transition::Started(id) => vec![AppEvent::TrackStarted(id)],
            Transition::Stopped(id) => vec![AppEvent::TrackStopped(id)],
            Transition::Switched { from, to } => {
                vec![AppEvent::TrackStopped(from), AppEvent::TrackStarted(to)]
            }
            Transition::Failed(id) => vec![AppEvent::PlaybackFailed(id)],
        };
        for event in events {
            self.emit(event);
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(id) = self.playback.stop() {
            self.emit(AppEvent::TrackStopped(id));
        }
    }

    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot {
            countdown: self.session.progress(now),
            remaining: self.session.remaining(now),
            expired: self.session.is_expired(now),
            playing: self.playback.state(),
            track_progress: self.playback.progress(),
        }
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
        if self.settings_open {
            self.focus = Focus::Settings;
        } else if self.focus == Focus::Settings {
            self.focus = Focus::Presets;
        }
    }

    /// Cycle focus through the visible areas.
    pub fn focus_next(&mut self) {
        let has_tracks = !self.catalog.is_empty();
        self.focus = match self.focus {
            Focus::Presets if has_tracks => Focus::Tracks,
            Focus::Presets | Focus::Tracks if self.settings_open => Focus::Settings,
            _ => Focus::Presets,
        };
    }

    /// Move the cursor within the focused area by `dx` columns and `dy` rows.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        match self.focus {
            Focus::Presets => {
                // Presets plus the Stop button.
                let len = self.presets.presets().len() + 1;
                self.preset_cursor = step(self.preset_cursor, dx, len);
            }
            Focus::Tracks => {
                let rows = self.catalog.rows.len();
                if rows == 0 {
                    return;
                }
                let (mut row, mut col) = self.track_cursor;
                row = step(row.min(rows - 1), dy, rows);
                let cols = self.catalog.rows[row].tracks.len();
                col = step(col.min(cols - 1), dx, cols);
                self.track_cursor = (row, col);
            }
            Focus::Settings => {
                self.settings_cursor = step(self.settings_cursor, dy + dx, self.choices.len());
            }
        }
    }

    /// Press whatever the cursor points at.
    pub fn activate_selection(&mut self, now: Instant) {
        match self.focus {
            Focus::Presets => match self.presets.presets().get(self.preset_cursor).copied() {
                Some(minutes) => {
                    if let Err(e) = self.start_countdown(minutes, now) {
                        log::warn!("{e}");
                    }
                }
                None => self.stop_countdown(),
            },
            Focus::Tracks => {
                let (row, col) = self.track_cursor;
                if let Some(id) = self.catalog.at(row, col).map(|t| t.id) {
                    self.activate_track(id);
                }
            }
            Focus::Settings => {
                if let Some(minutes) = self.choices.get(self.settings_cursor).copied() {
                    if let Err(e) = self.toggle_preset(minutes) {
                        log::warn!("{e}");
                    }
                }
            }
        }
    }

    pub fn shutdown(&mut self, fade_out: Duration) {
        self.playback.shutdown(fade_out);
    }
}

/// Move `pos` by `delta` within `0..len`, clamping at the ends.
fn step(pos: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    pos.saturating_add_signed(delta).min(len - 1)
}
