// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Laptop model detection
//!
//! Matches the processor and graphics adapter descriptors against the
//! catalog's pattern tables and resolves the matching model record.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fwdetect::catalog::ModelCatalog;
//! use fwdetect::detector::ModelDetector;
//! use fwdetect::hardware::SystemHardware;
//!
//! let catalog = Arc::new(ModelCatalog::load(&path)?);
//! let detector = ModelDetector::new(catalog, SystemHardware::new());
//! match detector.detect_model() {
//!     Some(model) => println!("Running on {}", model.name),
//!     None => println!("Unknown model"),
//! }
//! ```

pub mod detect;
pub mod rules;

pub use detect::{Descriptors, ModelDetector};
pub use rules::{classify, Classification, Confidence, GpuFlags, Match};
