// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model catalog
//!
//! Holds the attribute record of every known laptop model together with the
//! regex tables used to recognize them. The catalog is read once from a JSON
//! document and never changes afterwards, so it can be shared freely behind
//! an `Arc`.
//!
//! ## Document layout
//!
//! ```json
//! {
//!   "models": {
//!     "16_AMD": { "name": "Framework 16 AMD", "has_dgpu": true, "gpu": "AMD Radeon RX 7700S", ... }
//!   },
//!   "patterns": {
//!     "cpu": { "16_AMD": ["Ryzen.*7[89]40HS"] },
//!     "gpu": { "discrete": ["RX\\s*7700S"], "integrated_780m": ["780M"], "integrated_760m": ["760M"] }
//!   },
//!   "profiles": { }
//! }
//! ```
//!
//! `patterns` is optional and defaults to the built-in table. `profiles` is
//! kept verbatim for downstream consumers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fwdetect::catalog::ModelCatalog;
//!
//! let catalog = ModelCatalog::load(Path::new("configs/models.json"))?;
//! if let Some(model) = catalog.get("16_AMD") {
//!     println!("{} ({}W-{}W)", model.name, model.tdp.min, model.tdp.max);
//! }
//! ```

pub mod loader;
pub mod patterns;
pub mod schema;

pub use loader::{ModelCatalog, FALLBACK_RELATIVE_PATH};
pub use patterns::{CompiledPatterns, PatternGroup};
pub use schema::{
    CatalogDocument, DisplaySpec, GpuClass, ModelClass, ModelRecord, PatternTable, RamSpec,
    StorageSpec, TdpRange,
};
