use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::AudioFile;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Catalog, Row, Track, TrackId};

/// Written once into the music folder so users know how to name their files.
pub const INSTRUCTIONS_FILE_NAME: &str = "How to add music.txt";

const INSTRUCTIONS: &str = "\
Put .mp3 or .m4a files in this folder to get buttons for them in yintimer.

Name each file like this:

    <prefix> <symbol> <anything>.mp3

For example \"01 🌊 Waves.mp3\". The prefix decides the order of the buttons
(zero-pad numbers so \"02\" sorts before \"10\"), the first character after the
space is shown on the button, and the rest of the name is ignored.

Each folder inside this one becomes its own row of buttons, ordered by folder name.
";

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to walk music folder: {0}")]
    Walk(#[from] walkdir::Error),
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Glyph for a track file, or `None` when the file does not follow the naming rule.
///
/// The file name is split on its first space; the glyph is the first
/// grapheme of what follows.
pub fn parse_glyph(path: &Path, settings: &LibrarySettings) -> Option<String> {
    if !is_audio_file(path, settings) {
        return None;
    }
    let name = path.file_name()?.to_str()?;
    let (_prefix, rest) = name.split_once(' ')?;
    rest.graphemes(true).next().map(str::to_string)
}

fn read_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
        Err(e) => {
            log::debug!("no duration for {}: {e}", path.display());
            None
        }
    }
}

/// Immediate children of `dir`, split into files and directories, each sorted by path.
///
/// Failing to read `dir` itself is an error. A child that cannot be
/// inspected, such as a dangling symlink, is skipped.
fn list_dir(
    dir: &Path,
    settings: &LibrarySettings,
) -> Result<(Vec<PathBuf>, Vec<PathBuf>), LibraryError> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by(|a, b| a.path().cmp(b.path()));

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        } else if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok((files, dirs))
}

fn tracks_in(files: &[PathBuf], settings: &LibrarySettings, next_id: &mut usize) -> Vec<Track> {
    let mut tracks = Vec::new();
    for path in files {
        if path.file_name().and_then(|n| n.to_str()) == Some(INSTRUCTIONS_FILE_NAME) {
            continue;
        }
        let Some(glyph) = parse_glyph(path, settings) else {
            log::debug!("skipping {}", path.display());
            continue;
        };
        tracks.push(Track {
            id: TrackId(*next_id),
            path: path.clone(),
            glyph,
            duration: read_duration(path),
        });
        *next_id += 1;
    }
    tracks
}

/// Build the catalog for `root`, propagating the first filesystem error.
pub fn try_discover(root: &Path, settings: &LibrarySettings) -> Result<Catalog, LibraryError> {
    let mut next_id = 0;
    let mut rows = Vec::new();

    let (files, dirs) = list_dir(root, settings)?;
    let top = tracks_in(&files, settings, &mut next_id);
    if !top.is_empty() {
        rows.push(Row {
            name: None,
            tracks: top,
        });
    }

    for dir in dirs {
        let (files, _) = list_dir(&dir, settings)?;
        let tracks = tracks_in(&files, settings, &mut next_id);
        if tracks.is_empty() {
            continue;
        }
        rows.push(Row {
            name: dir.file_name().map(|n| n.to_string_lossy().into_owned()),
            tracks,
        });
    }

    Ok(Catalog { rows })
}

/// Build the catalog for `root`. Any filesystem error yields an empty catalog.
pub fn discover(root: &Path, settings: &LibrarySettings) -> Catalog {
    if settings.create_instructions {
        match ensure_instructions(root) {
            Ok(true) => log::info!("wrote naming instructions into {}", root.display()),
            Ok(false) => {}
            Err(e) => log::warn!("could not write instructions file: {e}"),
        }
    }

    match try_discover(root, settings) {
        Ok(catalog) => {
            log::info!(
                "found {} tracks in {} rows under {}",
                catalog.tracks().count(),
                catalog.rows.len(),
                root.display()
            );
            catalog
        }
        Err(e) => {
            log::warn!("music discovery failed, continuing without tracks: {e}");
            Catalog::default()
        }
    }
}

/// Create the instructions file in `root` unless it already exists.
///
/// Returns whether a file was written. A missing root is left alone.
pub fn ensure_instructions(root: &Path) -> io::Result<bool> {
    if !root.is_dir() {
        return Ok(false);
    }
    let path = root.join(INSTRUCTIONS_FILE_NAME);
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, INSTRUCTIONS)?;
    Ok(true)
}
