use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use super::registry::PresetError;

/// Durable home of the preset set. Order on disk carries no meaning.
pub trait PresetStore {
    /// Read the stored set, `None` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<u32>>, PresetError>;
    fn write(&mut self, presets: &[u32]) -> Result<(), PresetError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PresetFile {
    presets: Vec<u32>,
}

/// Stores presets as `presets = [..]` in a TOML file.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PresetStore for TomlFileStore {
    fn read(&self) -> Result<Option<Vec<u32>>, PresetError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let file: PresetFile = toml::from_str(&text)?;
        Ok(Some(file.presets))
    }

    fn write(&mut self, presets: &[u32]) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string(&PresetFile {
            presets: presets.to_vec(),
        })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Keeps presets for the lifetime of the process only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    presets: Option<Vec<u32>>,
    writes: usize,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_presets(presets: Vec<u32>) -> Self {
        Self {
            presets: Some(presets),
            writes: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PresetStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u32>>, PresetError> {
        Ok(self.presets.clone())
    }

    fn write(&mut self, presets: &[u32]) -> Result<(), PresetError> {
        self.presets = Some(presets.to_vec());
        self.writes += 1;
        log::debug!("presets kept in memory (write {})", self.writes);
        Ok(())
    }
}

/// `$XDG_DATA_HOME/yintimer/presets.toml` or `~/.local/share/yintimer/presets.toml`.
pub fn default_presets_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
    };

    data_home.map(|d| d.join("yintimer").join("presets.toml"))
}
