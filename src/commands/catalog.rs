// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalog inspection commands

use serde::Serialize;

use super::render_model;
use crate::catalog::ModelCatalog;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::error::{FwError, Result};

#[derive(Serialize)]
struct ModelSummary<'a> {
    id: &'a str,
    name: &'a str,
    has_dgpu: bool,
}

/// Execute the show command
pub fn show(catalog: &ModelCatalog, args: &ShowArgs, format: OutputFormat) -> Result<()> {
    let model = catalog
        .get(&args.id)
        .ok_or_else(|| FwError::InvalidOverrideIdentifier(args.id.clone()))?;

    if format == OutputFormat::Json {
        let mut value = serde_json::to_value(model)?;
        value["id"] = serde_json::Value::String(model.id.clone());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render_model(model));
    }
    Ok(())
}

/// Execute the list command
pub fn list(catalog: &ModelCatalog, format: OutputFormat) -> Result<()> {
    let summaries: Vec<ModelSummary> = catalog
        .models()
        .map(|m| ModelSummary {
            id: &m.id,
            name: &m.name,
            has_dgpu: m.has_dgpu,
        })
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if let Some(source) = catalog.source() {
        println!("Catalog: {}\n", source.display());
    }
    for summary in summaries {
        println!(
            "  {:<10} {}{}",
            summary.id,
            summary.name,
            if summary.has_dgpu { " (dGPU)" } else { "" }
        );
    }
    Ok(())
}
