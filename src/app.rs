//! Application module: the single controller that owns all timer state.
//!
//! `App` lives in `app::model`. It owns the countdown, the presets, the
//! music catalog and playback, tells subscribers about every state change,
//! and hands the renderer a `Snapshot` on each tick.

mod model;

pub use model::*;
