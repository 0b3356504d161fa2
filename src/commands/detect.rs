// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Detect and probe commands

use std::sync::Arc;

use crossterm::style::Color;
use serde::Serialize;

use super::{build_detector, print_colored, render_model};
use crate::catalog::{ModelCatalog, ModelRecord};
use crate::cli::args::{DescriptorArgs, DetectArgs, OutputFormat};
use crate::config::Settings;
use crate::detector::{Classification, Descriptors};
use crate::error::Result;

#[derive(Serialize)]
struct DetectReport<'a> {
    id: Option<&'a str>,
    model: Option<&'a ModelRecord>,
    refresh_rates: Vec<u32>,
}

impl<'a> DetectReport<'a> {
    fn new(model: Option<&'a ModelRecord>) -> Self {
        Self {
            id: model.map(|m| m.id.as_str()),
            model,
            refresh_rates: model
                .map(ModelRecord::supported_refresh_rates)
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct ProbeReport<'a> {
    processor: &'a str,
    adapters: &'a [String],
    #[serde(flatten)]
    classification: &'a Classification,
}

/// Execute the detect command. Returns whether a model was resolved.
pub fn execute(
    catalog: Arc<ModelCatalog>,
    settings: &Settings,
    args: &DetectArgs,
    format: OutputFormat,
) -> Result<bool> {
    let detector = build_detector(catalog, &args.descriptors);

    // Command line beats the pinned model in settings
    let forced = args
        .model
        .clone()
        .map(serde_json::Value::String)
        .or_else(|| settings.model_override.clone());

    let model = detector.resolve(forced.as_ref());

    if format == OutputFormat::Json {
        let report = DetectReport::new(model.as_ref());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(model.is_some());
    }

    match &model {
        Some(model) => {
            print_colored(Color::Green, &format!("Detected {}", model.name));
            println!("{}", render_model(model));
            let rates: Vec<String> = model
                .supported_refresh_rates()
                .iter()
                .map(|r| format!("{}Hz", r))
                .collect();
            println!("Refresh rates: {}", rates.join(" / "));
        }
        None => {
            print_colored(Color::Yellow, "Unknown model");
            println!("Run 'fwdetect probe' to see the raw hardware descriptors");
        }
    }

    Ok(model.is_some())
}

/// Execute the probe command
pub fn probe(catalog: Arc<ModelCatalog>, args: &DescriptorArgs, format: OutputFormat) -> Result<()> {
    let detector = build_detector(catalog, args);
    let descriptors = detector.descriptors()?;
    let classification = detector.classify(&descriptors);

    if format == OutputFormat::Json {
        let report = ProbeReport {
            processor: &descriptors.processor,
            adapters: &descriptors.adapters,
            classification: &classification,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render_probe(&descriptors, &classification));
    Ok(())
}

fn render_probe(descriptors: &Descriptors, classification: &Classification) -> String {
    let mut out = String::from("=== Descriptors ===\n");
    out.push_str(&format!("Processor: {}\n", descriptors.processor));
    if descriptors.adapters.is_empty() {
        out.push_str("Adapters: none\n");
    }
    for adapter in &descriptors.adapters {
        out.push_str(&format!("Adapter: {}\n", adapter));
    }

    let flags = &classification.flags;
    out.push_str("\n=== GPU Groups ===\n");
    out.push_str(&format!("discrete: {}\n", flags.discrete));
    out.push_str(&format!("integrated_780m: {}\n", flags.integrated_a));
    out.push_str(&format!("integrated_760m: {}\n", flags.integrated_b));

    out.push_str("\n=== Classification ===\n");
    for class in &classification.rejected {
        out.push_str(&format!("Rejected: {} (GPU mismatch)\n", class));
    }
    match classification.matched {
        Some(m) => out.push_str(&format!("Match: {} ({:?})", m.class, m.confidence)),
        None => out.push_str("Match: none"),
    }
    out
}
