// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for fwdetect.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fwdetect - identify the Framework laptop model you are running on
#[derive(Parser, Debug)]
#[command(name = "fwdetect")]
#[command(version, about = "Identify the Framework laptop model you are running on")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Model catalog path (overrides settings)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Settings file path
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the running model (default when no command given)
    Detect(DetectArgs),

    /// Show one catalog model
    Show(ShowArgs),

    /// List catalog models
    #[command(alias = "ls")]
    List,

    /// Print raw descriptors and how they were classified
    Probe(DescriptorArgs),

    /// Force a model in settings, bypassing detection
    Pin(PinArgs),
}

/// Replacement descriptors, instead of querying the host
#[derive(clap::Args, Debug, Default, Clone)]
pub struct DescriptorArgs {
    /// Processor descriptor
    #[arg(long)]
    pub cpu: Option<String>,

    /// Graphics adapter descriptor (repeatable)
    #[arg(long = "gpu", requires = "cpu")]
    pub gpus: Vec<String>,
}

/// Arguments for the detect subcommand
#[derive(clap::Args, Debug, Default)]
pub struct DetectArgs {
    /// Model identifier to use instead of detecting
    #[arg(short, long)]
    pub model: Option<String>,

    #[command(flatten)]
    pub descriptors: DescriptorArgs,
}

/// Arguments for the show subcommand
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Model identifier, e.g. 16_AMD
    pub id: String,
}

/// Arguments for the pin subcommand
#[derive(clap::Args, Debug)]
pub struct PinArgs {
    /// Model identifier to pin
    #[arg(required_unless_present = "clear", conflicts_with = "clear")]
    pub id: Option<String>,

    /// Remove the pinned model
    #[arg(long)]
    pub clear: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
