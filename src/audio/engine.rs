use std::thread;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::library::Track;

use super::sink::create_looping_sink;
use super::types::{AudioEngine, AudioError};

/// Plays through the default output device.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    total: Option<Duration>,
    volume: f32,
}

impl RodioEngine {
    pub fn open(settings: &AudioSettings) -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped, which would land on the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            total: None,
            volume: settings.volume,
        })
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out: Duration) {
    let fade_out_ms = fade_out.as_millis() as u64;
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

impl AudioEngine for RodioEngine {
    fn play_looped(&mut self, track: &Track) -> Result<(), AudioError> {
        self.stop();

        let (sink, total) = create_looping_sink(&self.stream, track)?;
        sink.set_volume(self.volume);
        sink.play();

        self.total = total.or(track.duration);
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.total = None;
    }

    fn position(&self) -> Option<Duration> {
        self.sink.as_ref().map(Sink::get_pos)
    }

    fn total(&self) -> Option<Duration> {
        self.total
    }

    fn shutdown(&mut self, fade_out: Duration) {
        if let Some(sink) = self.sink.as_ref() {
            fade_out_sink(sink, self.volume, fade_out);
        }
        self.stop();
    }
}

/// Stand-in when no output device could be opened: every start attempt fails.
#[derive(Debug, Default)]
pub struct NullEngine;

impl AudioEngine for NullEngine {
    fn play_looped(&mut self, _track: &Track) -> Result<(), AudioError> {
        Err(AudioError::NoOutput)
    }

    fn stop(&mut self) {}

    fn position(&self) -> Option<Duration> {
        None
    }

    fn total(&self) -> Option<Duration> {
        None
    }
}

/// Open the default output, falling back to `NullEngine` when there is none.
pub fn open_engine(settings: &AudioSettings) -> Box<dyn AudioEngine> {
    match RodioEngine::open(settings) {
        Ok(engine) => Box::new(engine),
        Err(e) => {
            log::warn!("audio disabled: {e}");
            Box::new(NullEngine)
        }
    }
}
