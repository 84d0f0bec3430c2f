use super::*;
use tempfile::tempdir;

struct BrokenStore;

impl PresetStore for BrokenStore {
    fn read(&self) -> Result<Option<Vec<u32>>, PresetError> {
        Err(std::io::Error::other("disk on fire").into())
    }

    fn write(&mut self, _presets: &[u32]) -> Result<(), PresetError> {
        Err(std::io::Error::other("disk on fire").into())
    }
}

#[test]
fn choices_cover_one_to_twenty_then_steps_of_five() {
    let c = choices();
    assert_eq!(c.len(), 34);
    assert_eq!(&c[..3], &[1, 2, 3]);
    assert_eq!(c[19], 20);
    assert_eq!(c[20], 25);
    assert_eq!(*c.last().unwrap(), 90);
    assert!(c.iter().all(|&v| is_choice(v)));
    assert!(!is_choice(0));
    assert!(!is_choice(21));
    assert!(!is_choice(95));
}

#[test]
fn first_load_registers_defaults_durably() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("presets.toml");

    let reg = PresetRegistry::load(Box::new(TomlFileStore::new(&path)), &DEFAULT_PRESETS);
    assert_eq!(reg.presets(), &[3, 5, 6]);
    assert!(path.exists());

    let stored = TomlFileStore::new(&path).read().unwrap();
    assert_eq!(stored, Some(vec![3, 5, 6]));
}

#[test]
fn toggle_twice_restores_and_once_inserts_sorted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("presets.toml");
    let mut reg = PresetRegistry::load(Box::new(TomlFileStore::new(&path)), &DEFAULT_PRESETS);

    assert_eq!(reg.toggle(7).unwrap(), &[3, 5, 6, 7]);
    assert!(reg.contains(7));
    assert_eq!(reg.toggle(4).unwrap(), &[3, 4, 5, 6, 7]);
    assert_eq!(reg.toggle(4).unwrap(), &[3, 5, 6, 7]);
    assert_eq!(reg.toggle(7).unwrap(), &[3, 5, 6]);

    // Each toggle is written through immediately.
    reg.toggle(45).unwrap();
    let reloaded = PresetRegistry::load(Box::new(TomlFileStore::new(&path)), &DEFAULT_PRESETS);
    assert_eq!(reloaded.presets(), &[3, 5, 6, 45]);
}

#[test]
fn removing_every_preset_leaves_an_empty_set() {
    let mut reg = PresetRegistry::load(Box::new(MemoryStore::with_presets(vec![5])), &DEFAULT_PRESETS);
    assert_eq!(reg.toggle(5).unwrap(), &[] as &[u32]);
    assert!(reg.presets().is_empty());
}

#[test]
fn values_outside_the_menu_are_rejected() {
    let mut reg = PresetRegistry::load(Box::new(MemoryStore::default()), &DEFAULT_PRESETS);
    assert!(matches!(reg.toggle(22), Err(PresetError::NotAChoice(22))));
    assert!(matches!(reg.toggle(0), Err(PresetError::NotAChoice(0))));
    assert_eq!(reg.presets(), &[3, 5, 6]);
}

#[test]
fn stored_sets_are_sorted_and_cleaned_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("presets.toml");
    std::fs::write(&path, "presets = [30, 2, 22, 2, 10]\n").unwrap();

    let reg = PresetRegistry::load(Box::new(TomlFileStore::new(&path)), &DEFAULT_PRESETS);
    assert_eq!(reg.presets(), &[2, 10, 30]);
}

#[test]
fn storage_failures_fall_back_without_panicking() {
    let mut reg = PresetRegistry::load(Box::new(BrokenStore), &DEFAULT_PRESETS);
    assert_eq!(reg.presets(), &[3, 5, 6]);
    assert_eq!(reg.toggle(10).unwrap(), &[3, 5, 6, 10]);
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("presets.toml");
    std::fs::write(&path, "presets = \"nope\"").unwrap();

    let reg = PresetRegistry::load(Box::new(TomlFileStore::new(&path)), &[1, 2]);
    assert_eq!(reg.presets(), &[1, 2]);
}

#[test]
fn memory_store_counts_writes() {
    let mut store = MemoryStore::default();
    assert_eq!(store.read().unwrap(), None);
    store.write(&[1, 2]).unwrap();
    assert_eq!(store.writes(), 1);
    assert_eq!(store.read().unwrap(), Some(vec![1, 2]));
}
