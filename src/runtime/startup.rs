use crate::app::{App, AppEvent};
use crate::awake::{self, KeepAwake, NoopKeepAwake};
use crate::config;
use crate::presets::{self, MemoryStore, PresetRegistry, PresetStore, TomlFileStore};

/// Open the preset store named in the settings, or the XDG default.
pub fn load_presets(settings: &config::PresetSettings) -> PresetRegistry {
    let path = settings.path.clone().or_else(presets::default_presets_path);
    let store: Box<dyn PresetStore> = match path {
        Some(path) => {
            log::info!("presets stored in {}", path.display());
            Box::new(TomlFileStore::new(path))
        }
        None => {
            log::warn!("no place to store presets; changes last until exit");
            Box::new(MemoryStore::default())
        }
    };
    PresetRegistry::load(store, &settings.defaults)
}

/// Keep the screen on from countdown start until it is stopped.
pub fn attach_keep_awake(app: &mut App, settings: &config::AwakeSettings) {
    let keep: Box<dyn KeepAwake> = if settings.enabled {
        Box::new(awake::spawn_inhibitor())
    } else {
        Box::new(NoopKeepAwake)
    };
    subscribe_keep_awake(app, keep);
}

/// Expiry emits nothing, so the screen stays on until the countdown is stopped.
fn subscribe_keep_awake(app: &mut App, mut keep: Box<dyn KeepAwake>) {
    app.subscribe(move |event| match event {
        AppEvent::CountdownStarted { .. } => keep.set_awake(true),
        AppEvent::CountdownStopped => keep.set_awake(false),
        _ => {}
    });
}
