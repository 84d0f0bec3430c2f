use std::time::Duration;

use crate::library::{Track, TrackId};

use super::types::{AudioEngine, PlaybackState, Transition};

pub struct PlaybackController {
    engine: Box<dyn AudioEngine>,
    active: Option<TrackId>,
}

impl PlaybackController {
    pub fn new(engine: Box<dyn AudioEngine>) -> Self {
        Self {
            engine,
            active: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match self.active {
            Some(id) => PlaybackState::Playing(id),
            None => PlaybackState::Idle,
        }
    }

    /// Tap on a track: start it, stop it if it is the one playing, or switch to it.
    ///
    /// Engine failures are logged and leave the controller idle.
    pub fn activate(&mut self, track: &Track) -> Transition {
        let previous = self.active.take();
        if previous.is_some() {
            self.engine.stop();
        }
        if previous == Some(track.id) {
            log::info!("stopped {}", track.path.display());
            return Transition::Stopped(track.id);
        }

        if let Err(e) = self.engine.play_looped(track) {
            log::warn!("could not play {}: {e}", track.path.display());
            return Transition::Failed(track.id);
        }
        log::info!("playing {}", track.path.display());
        self.active = Some(track.id);

        match previous {
            Some(from) => Transition::Switched { from, to: track.id },
            None => Transition::Started(track.id),
        }
    }

    /// Stop whatever plays and return its id.
    pub fn stop(&mut self) -> Option<TrackId> {
        let previous = self.active.take();
        if previous.is_some() {
            self.engine.stop();
        }
        previous
    }

    /// Fraction of the current pass through the playing track.
    pub fn progress(&self) -> Option<f64> {
        self.active?;
        let position = self.engine.position()?;
        let total = self.engine.total()?;
        if total.is_zero() {
            return None;
        }
        let total = total.as_secs_f64();
        Some(position.as_secs_f64() % total / total)
    }

    pub fn shutdown(&mut self, fade_out: Duration) {
        self.active = None;
        self.engine.shutdown(fade_out);
    }
}
