use std::collections::BTreeSet;

use thiserror::Error;

use super::store::PresetStore;

/// Presets registered on first run.
pub const DEFAULT_PRESETS: [u32; 3] = [3, 5, 6];

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("{0} minutes is not one of the selectable presets")]
    NotAChoice(u32),
    #[error("preset storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stored presets: {0}")]
    Decode(#[from] toml::de::Error),
    #[error("failed to encode presets: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Every value the settings menu offers: 1..=20, then 25..=90 in steps of five.
pub fn choices() -> Vec<u32> {
    (1..=20).chain((25..=90).step_by(5)).collect()
}

pub fn is_choice(minutes: u32) -> bool {
    match minutes {
        1..=20 => true,
        25..=90 => minutes % 5 == 0,
        _ => false,
    }
}

/// Drop duplicates and out-of-menu values, sort ascending.
fn normalize(values: &[u32]) -> Vec<u32> {
    values
        .iter()
        .copied()
        .filter(|&v| is_choice(v))
        .collect::<BTreeSet<u32>>()
        .into_iter()
        .collect()
}

pub struct PresetRegistry {
    store: Box<dyn PresetStore>,
    presets: Vec<u32>,
}

impl PresetRegistry {
    /// Load the stored set, registering `defaults` durably when nothing is stored.
    ///
    /// Storage failures are logged and never fatal.
    pub fn load(mut store: Box<dyn PresetStore>, defaults: &[u32]) -> Self {
        let presets = match store.read() {
            Ok(Some(stored)) => normalize(&stored),
            Ok(None) => {
                let defaults = normalize(defaults);
                if let Err(e) = store.write(&defaults) {
                    log::warn!("could not register default presets: {e}");
                }
                defaults
            }
            Err(e) => {
                log::warn!("could not read presets, using defaults: {e}");
                normalize(defaults)
            }
        };
        log::debug!("loaded presets {presets:?}");

        Self { store, presets }
    }

    /// The chosen presets in ascending order.
    pub fn presets(&self) -> &[u32] {
        &self.presets
    }

    pub fn contains(&self, minutes: u32) -> bool {
        self.presets.binary_search(&minutes).is_ok()
    }

    /// Add `minutes` if absent, remove it if present, then persist.
    ///
    /// Values outside [`choices`] are rejected without touching the set.
    pub fn toggle(&mut self, minutes: u32) -> Result<&[u32], PresetError> {
        if !is_choice(minutes) {
            return Err(PresetError::NotAChoice(minutes));
        }
        match self.presets.binary_search(&minutes) {
            Ok(pos) => {
                self.presets.remove(pos);
            }
            Err(pos) => self.presets.insert(pos, minutes),
        }
        if let Err(e) = self.store.write(&self.presets) {
            log::warn!("could not save presets: {e}");
        }
        Ok(&self.presets)
    }
}
