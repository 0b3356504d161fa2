// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;

use super::Settings;

/// Keys owned by [`Settings`]. Anything else in the file belongs to someone else.
const OWNED_KEYS: [&str; 2] = ["catalog_path", "model_override"];

/// Recursively overlay `overlay` onto `base`; non-object values replace.
fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::fwdetect_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a specific path, merging into the existing file so
    /// keys written by other tools or by hand survive.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let new_value = serde_json::to_value(self)?;

        let merged = if path.exists() {
            let existing_content = std::fs::read_to_string(path)?;
            match serde_json::from_str::<Value>(&existing_content) {
                Ok(Value::Object(mut existing)) => {
                    // Unset fields are skipped on serialize; drop their stale values
                    for key in OWNED_KEYS {
                        if new_value.get(key).is_none() {
                            existing.remove(key);
                        }
                    }
                    deep_merge(Value::Object(existing), new_value)
                }
                // Corrupt or non-object file, overwrite entirely
                _ => {
                    tracing::warn!("Replacing unreadable settings at {}", path.display());
                    new_value
                }
            }
        } else {
            new_value
        };

        let content = serde_json::to_string_pretty(&merged)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the fwdetect home directory (~/.fwdetect or $FWDETECT_HOME).
    pub fn fwdetect_home() -> PathBuf {
        if let Ok(home) = std::env::var("FWDETECT_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fwdetect")
    }
}
