// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! fwdetect - identifies the Framework laptop model a process is running on.
//!
//! This crate exposes:
//! - `catalog`: the JSON model catalog with attribute records and pattern tables
//! - `hardware`: processor and graphics adapter descriptor providers
//! - `detector`: ordered classification rules and the `ModelDetector`
//! - `config`: user settings (catalog location, pinned model)
//! - `cli`, `commands`: the `fwdetect` command-line front end

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod error;
pub mod hardware;

pub use catalog::{ModelCatalog, ModelRecord};
pub use detector::ModelDetector;
pub use error::{FwError, Result};
