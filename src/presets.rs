//! Preset durations: the candidate menu, the user's chosen set and its storage.
//!
//! The registry keeps the chosen minutes sorted ascending for display and
//! writes the whole set back to its store after every toggle.

mod registry;
mod store;

pub use registry::*;
pub use store::*;

#[cfg(test)]
mod tests;
