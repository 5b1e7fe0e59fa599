use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use super::PreferenceStore;
use crate::config::data_dir;

/// Preferences kept as a flat JSON object on disk, rewritten on every set.
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    pub fn new() -> Self {
        Self::open(data_dir().join("preferences.json"))
    }

    /// A missing file is an empty store. A file that cannot be read or
    /// parsed is logged and also treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = if path.exists() {
            match read_values(&path) {
                Ok(values) => values,
                Err(e) => {
                    warn!(path = %path.display(), error = %format!("{e:#}"), "ignoring unreadable preferences");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        Self { path, values }
    }

    /// Writes a sibling temp file and renames it over the real one, so a
    /// crash mid-write leaves the previous preferences intact.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;

        let temp_path = temp_path_for(&self.path);
        let mut file = File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e).with_context(|| format!("Failed to replace {}", self.path.display()));
        }
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let values = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(values)
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            warn!(key, error = %format!("{e:#}"), "failed to persist preference");
        }
    }
}
