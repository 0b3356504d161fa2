// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model catalog loader
//!
//! Reads the catalog document from:
//! 1. The path given by the caller
//! 2. `configs/models.json` next to the running executable, when (1) is missing

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{FwError, Result};

use super::patterns::CompiledPatterns;
use super::schema::{CatalogDocument, ModelRecord, PatternTable};

/// Alternate location probed when the primary path does not exist
pub const FALLBACK_RELATIVE_PATH: &str = "configs/models.json";

/// Immutable catalog of known models and their classification patterns
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: BTreeMap<String, ModelRecord>,
    patterns: PatternTable,
    compiled: CompiledPatterns,
    profiles: serde_json::Value,
    /// Path the catalog was read from (if loaded from disk)
    source: Option<PathBuf>,
}

impl ModelCatalog {
    /// Load from `path`, falling back to the bundled location
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_fallback(path, &Self::fallback_path())
    }

    /// Load from `primary`, or from `fallback` when `primary` does not exist
    pub fn load_with_fallback(primary: &Path, fallback: &Path) -> Result<Self> {
        let path = if primary.is_file() {
            primary
        } else if fallback.is_file() {
            tracing::debug!(
                "Model catalog not found at {}, using {}",
                primary.display(),
                fallback.display()
            );
            fallback
        } else {
            return Err(FwError::ConfigNotFound {
                primary: primary.to_path_buf(),
                fallback: fallback.to_path_buf(),
            });
        };

        let content = std::fs::read(path)?;
        let mut catalog = Self::from_json_slice(&content)?;
        catalog.source = Some(path.to_path_buf());
        tracing::info!("Loaded model catalog from {}", path.display());
        Ok(catalog)
    }

    /// Bundled catalog location, relative to the executable's directory
    pub fn fallback_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FALLBACK_RELATIVE_PATH)
    }

    /// Parse and validate an in-memory catalog document
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json_slice(content.as_bytes())
    }

    /// Parse and validate raw catalog bytes. Invalid UTF-8 is malformed JSON.
    pub fn from_json_slice(content: &[u8]) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_slice(content)
            .map_err(|e| FwError::ConfigMalformed(format!("invalid JSON: {}", e)))?;

        match raw.get("models") {
            Some(serde_json::Value::Object(_)) => {}
            Some(_) => {
                return Err(FwError::ConfigMalformed(
                    "'models' must be an object".to_string(),
                ))
            }
            None => {
                return Err(FwError::ConfigMalformed(
                    "missing top-level 'models' key".to_string(),
                ))
            }
        }

        let document: CatalogDocument = serde_json::from_value(raw)
            .map_err(|e| FwError::ConfigMalformed(e.to_string()))?;

        Self::from_document(document)
    }

    /// Build a catalog from an already parsed document
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut models = BTreeMap::new();
        for (id, mut record) in document.models {
            record.id = id.clone();
            record.validate().map_err(FwError::ConfigMalformed)?;
            models.insert(id, record);
        }

        for id in document.patterns.cpu.keys() {
            if !models.contains_key(id) {
                tracing::warn!("CPU patterns reference unknown model '{}'", id);
            }
        }

        let compiled = CompiledPatterns::compile(&document.patterns);
        tracing::debug!(
            "Catalog holds {} models, {} CPU pattern groups, {} GPU pattern groups",
            models.len(),
            document.patterns.cpu.len(),
            document.patterns.gpu.len()
        );

        Ok(Self {
            models,
            patterns: document.patterns,
            compiled,
            profiles: document.profiles,
            source: None,
        })
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, id: &str) -> Option<&ModelRecord> {
        self.models.get(id)
    }

    /// All records, ordered by id
    pub fn models(&self) -> impl Iterator<Item = &ModelRecord> {
        self.models.values()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Raw pattern tables as written in the document
    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn compiled(&self) -> &CompiledPatterns {
        &self.compiled
    }

    /// Power and fan presets, passed through untouched
    pub fn profiles(&self) -> &serde_json::Value {
        &self.profiles
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Re-emit the catalog as a document
    pub fn to_document(&self) -> Result<serde_json::Value> {
        let document = CatalogDocument {
            models: self.models.clone(),
            patterns: self.patterns.clone(),
            profiles: self.profiles.clone(),
        };
        Ok(serde_json::to_value(document)?)
    }
}
