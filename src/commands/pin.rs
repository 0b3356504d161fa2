// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Pin command: force a model in settings

use std::path::Path;
use std::sync::Arc;

use crate::catalog::ModelCatalog;
use crate::cli::args::PinArgs;
use crate::config::Settings;
use crate::error::{FwError, Result};

/// Execute the pin command, writing the settings file at `path`.
///
/// The catalog is only loaded when pinning, so `--clear` works without one.
pub fn execute<F>(path: &Path, args: &PinArgs, load_catalog: F) -> Result<()>
where
    F: FnOnce() -> Result<Arc<ModelCatalog>>,
{
    let mut settings = Settings::load_from(path)?;

    match (&args.id, args.clear) {
        (_, true) => {
            settings.model_override = None;
            println!("Cleared pinned model");
        }
        (Some(id), false) => {
            let catalog = load_catalog()?;
            let model = catalog
                .get(id)
                .ok_or_else(|| FwError::InvalidOverrideIdentifier(id.clone()))?;
            settings.model_override = Some(serde_json::Value::String(model.id.clone()));
            println!("Pinned {} ({})", model.name, model.id);
        }
        (None, false) => {
            return Err(FwError::InvalidOverrideIdentifier(
                "no model identifier given".to_string(),
            ))
        }
    }

    settings.save_to(path)
}
