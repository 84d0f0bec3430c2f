use super::*;
use crate::config::LibrarySettings;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn glyph(name: &str) -> Option<String> {
    parse_glyph(Path::new(name), &LibrarySettings::default())
}

fn touch(path: &Path) {
    fs::write(path, b"not real audio").unwrap();
}

#[test]
fn glyph_is_first_grapheme_after_prefix() {
    assert_eq!(glyph("07 🎵 My Song.mp3").as_deref(), Some("🎵"));
    assert_eq!(glyph("01 xyz.m4a").as_deref(), Some("x"));
    assert_eq!(glyph("01 Ä.MP3").as_deref(), Some("Ä"));
    // Flags and ZWJ sequences stay whole.
    assert_eq!(glyph("02 🇸🇪 Sweden.mp3").as_deref(), Some("🇸🇪"));
    assert_eq!(glyph("03 👩‍🚀.mp3").as_deref(), Some("👩‍🚀"));
}

#[test]
fn names_without_glyph_are_rejected() {
    assert_eq!(glyph("NoSpaceHere.mp3"), None);
    assert_eq!(glyph("01 x.txt"), None);
    assert_eq!(glyph("01 x"), None);
    assert_eq!(glyph("01 x.flac"), None);
}

#[test]
fn split_runs_on_the_whole_file_name() {
    // Remainder ".mp3" is not empty, so its first character is the glyph.
    assert_eq!(glyph("01 .mp3").as_deref(), Some("."));
}

#[test]
fn first_space_splits_even_when_remainder_starts_with_space() {
    // "01" + " x.mp3": the glyph is the second space.
    assert_eq!(glyph("01  x.mp3").as_deref(), Some(" "));
}

#[test]
fn discover_builds_root_row_then_non_empty_subfolders() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    touch(&root.join("07 🎵 My Song.mp3"));
    touch(&root.join("01 🌊 Waves.m4a"));
    touch(&root.join("NoSpaceHere.mp3"));
    touch(&root.join("01 x.txt"));

    let ambient = root.join("Ambient");
    fs::create_dir(&ambient).unwrap();
    touch(&ambient.join("1 🌲 Forest.mp3"));

    let empty = root.join("Empty");
    fs::create_dir(&empty).unwrap();
    touch(&empty.join("notes.txt"));

    let catalog = discover(root, &LibrarySettings::default());
    assert_eq!(catalog.rows.len(), 2);

    let top = &catalog.rows[0];
    assert_eq!(top.name, None);
    let glyphs: Vec<&str> = top.tracks.iter().map(|t| t.glyph.as_str()).collect();
    assert_eq!(glyphs, vec!["🌊", "🎵"]);

    assert_eq!(catalog.rows[1].name.as_deref(), Some("Ambient"));
    assert_eq!(catalog.rows[1].tracks[0].glyph, "🌲");

    // Ids follow catalog order.
    let ids: Vec<usize> = catalog.tracks().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(catalog.track(TrackId(2)).unwrap().glyph, "🌲");
    assert_eq!(catalog.at(1, 0).unwrap().id, TrackId(2));
}

#[test]
fn subfolder_rows_are_ordered_by_name_and_not_recursive() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    for name in ["b", "a", "c"] {
        let sub = root.join(name);
        fs::create_dir(&sub).unwrap();
        touch(&sub.join(format!("1 {name}.mp3")));
    }
    let deep = root.join("c").join("deeper");
    fs::create_dir(&deep).unwrap();
    touch(&deep.join("1 z.mp3"));

    let catalog = discover(root, &LibrarySettings::default());
    let names: Vec<&str> = catalog
        .rows
        .iter()
        .map(|r| r.name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(catalog.rows[2].tracks.len(), 1);
}

#[test]
fn hidden_entries_are_skipped() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join(".01 h.mp3"));
    let hidden = root.join(".secret");
    fs::create_dir(&hidden).unwrap();
    touch(&hidden.join("1 s.mp3"));

    let catalog = discover(root, &LibrarySettings::default());
    assert!(catalog.is_empty());
}

#[test]
fn instructions_file_is_created_once_and_never_a_track() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    assert!(ensure_instructions(root).unwrap());
    assert!(root.join(INSTRUCTIONS_FILE_NAME).exists());
    assert!(!ensure_instructions(root).unwrap());

    // Even if someone accepted .txt as audio, the instructions stay out.
    let settings = LibrarySettings {
        extensions: vec!["txt".into()],
        ..LibrarySettings::default()
    };
    let catalog = discover(root, &settings);
    assert!(catalog.is_empty());
}

#[test]
fn missing_root_yields_empty_catalog() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(try_discover(&missing, &LibrarySettings::default()).is_err());
    let catalog = discover(&missing, &LibrarySettings::default());
    assert!(catalog.is_empty());
    assert!(!missing.exists());
}

#[cfg(unix)]
#[test]
fn dangling_symlink_skips_only_that_entry() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("01 a.mp3"));
    std::os::unix::fs::symlink(root.join("gone.mp3"), root.join("02 b.mp3")).unwrap();
    fs::create_dir(root.join("Ambient")).unwrap();
    touch(&root.join("Ambient").join("01 c.mp3"));
    std::os::unix::fs::symlink(root.join("nowhere"), root.join("Ambient").join("02 d.mp3")).unwrap();

    let catalog = discover(root, &LibrarySettings::default());
    let glyphs: Vec<&str> = catalog.tracks().map(|t| t.glyph.as_str()).collect();
    assert_eq!(glyphs, vec!["a", "c"]);
    assert_eq!(catalog.rows.len(), 2);
}
