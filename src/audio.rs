//! Background music playback.
//!
//! `PlaybackController` is the state machine the UI talks to: at most one
//! track plays at a time, looping until it is tapped again or another track
//! replaces it. It drives an `AudioEngine`, which is `rodio` in the app and a
//! fake in tests.

mod controller;
mod engine;
mod sink;
mod types;

pub use controller::*;
pub use engine::*;
pub use types::*;
