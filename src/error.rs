// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for fwdetect
//!
//! Catalog errors are structural and propagate to whoever builds the
//! detector. Everything raised during a single detection pass is logged
//! and degraded to an unknown model instead.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for fwdetect operations
#[derive(Error, Debug)]
pub enum FwError {
    /// Catalog document missing at both the primary and the fallback path
    #[error("Model catalog not found at {} (fallback {})", .primary.display(), .fallback.display())]
    ConfigNotFound { primary: PathBuf, fallback: PathBuf },

    /// Catalog document present but unparsable or structurally invalid
    #[error("Malformed model catalog: {0}")]
    ConfigMalformed(String),

    /// Hardware provider could not be queried
    #[error("Hardware query failed: {0}")]
    HardwareQueryFailed(String),

    /// A single pattern could not be compiled or evaluated
    #[error("Invalid pattern '{pattern}': {reason}")]
    PatternMatch { pattern: String, reason: String },

    /// Manual override identifier is not a known model id
    #[error("Invalid model identifier: {0}")]
    InvalidOverrideIdentifier(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FwError {
    /// Whether the error is fatal to catalog construction.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            FwError::ConfigNotFound { .. } | FwError::ConfigMalformed(_)
        )
    }
}

/// Result type alias for fwdetect operations
pub type Result<T> = std::result::Result<T, FwError>;
