//! Audio-related small types: errors, the engine seam and playback state.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::library::{Track, TrackId};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output available")]
    NoOutput,
    #[error("failed to open audio output: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

/// Something that can loop one track at a time.
pub trait AudioEngine {
    /// Replace whatever is playing with `track`, repeating forever.
    fn play_looped(&mut self, track: &Track) -> Result<(), AudioError>;
    /// Stop immediately. A no-op when nothing plays.
    fn stop(&mut self);
    /// Position since playback started; may run past `total` while looping.
    fn position(&self) -> Option<Duration>;
    /// Length of one pass through the current track.
    fn total(&self) -> Option<Duration>;
    /// Stop before exit, optionally fading out.
    fn shutdown(&mut self, _fade_out: Duration) {
        self.stop();
    }
}

/// The playback state of the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(TrackId),
}

/// What an `activate` call did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Started(TrackId),
    Stopped(TrackId),
    Switched { from: TrackId, to: TrackId },
    /// The engine could not play the track; nothing plays now.
    Failed(TrackId),
}
