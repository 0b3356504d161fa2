// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand handlers
//!
//! Each handler takes the loaded catalog and settings and prints either
//! plain text or pretty JSON.

use std::io::{self, Write};
use std::sync::Arc;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::catalog::{ModelCatalog, ModelRecord};
use crate::cli::args::DescriptorArgs;
use crate::detector::ModelDetector;
use crate::hardware::{HardwareProvider, StaticHardware, SystemHardware};

pub mod catalog;
pub mod detect;
pub mod pin;

/// Build a detector over the host, or over replayed descriptors
pub fn build_detector(
    catalog: Arc<ModelCatalog>,
    descriptors: &DescriptorArgs,
) -> ModelDetector<Box<dyn HardwareProvider>> {
    let provider: Box<dyn HardwareProvider> = match &descriptors.cpu {
        Some(cpu) => Box::new(StaticHardware::new(cpu.clone(), descriptors.gpus.clone())),
        None => Box::new(SystemHardware::new()),
    };
    ModelDetector::new(catalog, provider)
}

/// Print a line in the given color, falling back to plain text
pub(crate) fn print_colored(color: Color, text: &str) {
    let mut stdout = io::stdout();
    // Color is cosmetic; on a failed escape the text still prints plain
    let _ = stdout.execute(SetForegroundColor(color));
    print!("{}", text);
    let _ = stdout.execute(ResetColor);
    println!();
    let _ = stdout.flush();
}

/// Multi-line text summary of a model record
pub fn render_model(model: &ModelRecord) -> String {
    let mut lines = vec![
        format!("Model: {} ({})", model.name, model.id),
        format!(
            "Display: {}\" {} ({}) @ {}Hz",
            model.display.size,
            model.display.resolution,
            model.display.aspect_ratio,
            model.display.refresh_rate
        ),
        format!(
            "RAM: up to {}GB {}-{}",
            model.ram.max_gb, model.ram.kind, model.ram.speed_mts
        ),
        format!(
            "Storage: {} slot(s), {}",
            model.storage.slots, model.storage.connector
        ),
        format!("Expansion ports: {}", model.expansion_ports),
        format!("Battery: {}Wh", model.battery),
        format!("TDP: {}W-{}W", model.tdp.min, model.tdp.max),
    ];
    match &model.gpu {
        Some(gpu) => lines.push(format!("dGPU: {}", gpu)),
        None => lines.push("dGPU: none".to_string()),
    }
    if !model.processors.is_empty() {
        lines.push(format!("Processors: {}", model.processors.join(", ")));
    }
    lines.join("\n")
}
