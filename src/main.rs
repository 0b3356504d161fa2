// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! fwdetect - identify the Framework laptop model you are running on
//!
//! Entry point for the fwdetect CLI application.

use std::sync::Arc;

use clap::Parser;

use fwdetect::catalog::ModelCatalog;
use fwdetect::cli::{Cli, Commands, DetectArgs};
use fwdetect::commands;
use fwdetect::config::Settings;
use fwdetect::error::Result;

/// Exit code when no model could be resolved
const EXIT_UNKNOWN_MODEL: i32 = 2;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` shows detection diagnostics, `-vv` everything. `RUST_LOG` still applies.
    let directive = match cli.verbose {
        0 => None,
        1 => Some("fwdetect=info"),
        _ => Some("fwdetect=debug"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings_path = cli.settings.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_from(&settings_path)?;

    // Loading the catalog is the only fatal step, done by the commands that need it
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| settings.catalog_path());
    let load_catalog = || ModelCatalog::load(&catalog_path).map(Arc::new);

    match cli.command {
        None => run_detect(load_catalog()?, &settings, &DetectArgs::default(), &cli),
        Some(Commands::Detect(ref args)) => run_detect(load_catalog()?, &settings, args, &cli),
        Some(Commands::Show(ref args)) => {
            commands::catalog::show(&*load_catalog()?, args, cli.format)
        }
        Some(Commands::List) => commands::catalog::list(&*load_catalog()?, cli.format),
        Some(Commands::Probe(ref args)) => {
            commands::detect::probe(load_catalog()?, args, cli.format)
        }
        Some(Commands::Pin(ref args)) => commands::pin::execute(&settings_path, args, load_catalog),
    }
}

fn run_detect(
    catalog: Arc<ModelCatalog>,
    settings: &Settings,
    args: &DetectArgs,
    cli: &Cli,
) -> Result<()> {
    if !commands::detect::execute(catalog, settings, args, cli.format)? {
        std::process::exit(EXIT_UNKNOWN_MODEL);
    }
    Ok(())
}
