//! Utilities for creating `rodio` sinks from `Track` values.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused, endlessly repeating `Sink`.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::library::Track;

use super::types::AudioError;

/// Create a paused `Sink` looping `track`, plus the length of one pass when known.
pub(super) fn create_looping_sink(
    handle: &OutputStream,
    track: &Track,
) -> Result<(Sink, Option<Duration>), AudioError> {
    let file = File::open(&track.path).map_err(|source| AudioError::Open {
        path: track.path.clone(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: track.path.clone(),
        source,
    })?;
    let total = source.total_duration();

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source.repeat_infinite());
    sink.pause();
    Ok((sink, total))
}
