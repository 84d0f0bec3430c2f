//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the timer, the music
//! catalog, playback and the clock face, plus helpers to load them.

mod load;
mod schema;

pub use load::*;
pub use schema::*;
