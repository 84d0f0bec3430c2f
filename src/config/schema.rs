use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/yintimer/config.toml` or `~/.config/yintimer/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `YINTIMER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timer: TimerSettings,
    pub library: LibrarySettings,
    pub presets: PresetSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub awake: AwakeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Redraw interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Music folder. A path given on the command line wins over this.
    pub music_dir: Option<PathBuf>,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Write a naming guide into the music folder when it is missing.
    pub create_instructions: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_dir: None,
            extensions: vec!["mp3".into(), "m4a".into()],
            include_hidden: false,
            create_instructions: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PresetSettings {
    /// Where the chosen presets are stored. Defaults to the XDG data dir.
    pub path: Option<PathBuf>,
    /// Presets registered on first run.
    pub defaults: Vec<u32>,
}

impl Default for PresetSettings {
    fn default() -> Self {
        Self {
            path: None,
            defaults: crate::presets::DEFAULT_PRESETS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Playback volume, 0.0 to 1.0.
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered in the header.
    pub header_text: String,
    /// Length of the countdown hand relative to half the clock height.
    pub radius_scale: f64,
    /// Length of a track button's hand relative to half the button height.
    pub track_radius_scale: f64,
    /// How far above centre the hand pivots, as a fraction of the clock height.
    pub pivot_inset: f64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " yintimer ".to_string(),
            radius_scale: 0.9,
            track_radius_scale: 0.8,
            pivot_inset: 0.07,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AwakeSettings {
    /// Ask the desktop to keep the screen on while a countdown runs.
    pub enabled: bool,
}

impl Default for AwakeSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
