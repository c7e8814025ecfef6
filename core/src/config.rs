//! Persisted client configuration.
//!
//! The client persists a single value across sessions: the API base URL,
//! under the key `apiBaseUrl`. `ConfigStore` keeps it in a small JSON file,
//! the disk analog of a browser host's local storage. A missing file is an
//! empty store; a corrupt file is an error.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// On-disk shape. The field name matches the storage key browser hosts use,
/// so a config written by either kind of host reads back identically.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredConfig {
    #[serde(rename = "apiBaseUrl", skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
}

/// File-backed store for the configured API base URL.
#[derive(Debug)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    values: StoredConfig,
}

impl ConfigStore {
    /// Load the store from `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoredConfig::default(),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(Self {
            path: Some(path),
            values,
        })
    }

    /// A store with no backing file. `save` is a no-op; useful for hosts
    /// without a writable disk and for tests.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: StoredConfig::default(),
        }
    }

    /// The saved base URL, if one was ever configured.
    pub fn base_url(&self) -> Option<&str> {
        self.values.api_base_url.as_deref()
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.values.api_base_url = Some(url.to_string());
    }

    /// Write the store back to its file, creating parent directories as
    /// needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.values)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, raw)?;
        Ok(())
    }
}
