use std::path::PathBuf;
use std::time::Duration;

/// Stable identity of a track inside one catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub usize);

#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    pub path: PathBuf,
    /// First grapheme after the filename's prefix, shown on the track button.
    pub glyph: String,
    /// Length from container metadata, when it could be read.
    pub duration: Option<Duration>,
}

/// Tracks from one folder. `name` is `None` for the music root.
#[derive(Debug, Clone)]
pub struct Row {
    pub name: Option<String>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub rows: Vec<Row>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.rows.iter().flat_map(|r| r.tracks.iter())
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks().find(|t| t.id == id)
    }

    /// Track at `row`/`col`, as laid out on screen.
    pub fn at(&self, row: usize, col: usize) -> Option<&Track> {
        self.rows.get(row).and_then(|r| r.tracks.get(col))
    }
}
