// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for fwdetect
//!
//! Handles loading settings from ~/.fwdetect/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;

/// Main settings structure, stored in ~/.fwdetect/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Model catalog location (defaults to ~/.fwdetect/models.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Forced model identifier, bypassing detection.
    ///
    /// Hand-edited, so kept as raw JSON and validated at lookup time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_override: Option<serde_json::Value>,
}

impl Settings {
    /// Catalog path from settings, or the default under the home directory
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| Self::fwdetect_home().join("models.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.catalog_path.is_none());
        assert!(settings.model_override.is_none());
        assert!(settings.catalog_path().ends_with("models.json"));
    }

    #[test]
    fn test_settings_explicit_catalog_path() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/opt/fw/models.json")),
            ..Default::default()
        };
        assert_eq!(settings.catalog_path(), PathBuf::from("/opt/fw/models.json"));
    }

    #[test]
    fn test_settings_override_keeps_raw_value() {
        let settings: Settings = serde_json::from_str(r#"{"model_override": 42}"#).unwrap();
        assert_eq!(settings.model_override, Some(serde_json::json!(42)));
    }

    #[test]
    fn test_settings_serialization_skips_unset() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
