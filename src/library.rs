//! Music catalog discovered from the music folder.
//!
//! The root folder's tracks form the first row, each immediate subdirectory
//! with at least one track adds another row. Track files are named
//! `<prefix> <glyph><anything>.<ext>`; the prefix only orders tracks.

mod model;
mod scan;

pub use model::*;
pub use scan::*;

#[cfg(test)]
mod tests;
