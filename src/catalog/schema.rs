// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model catalog schema
//!
//! Defines the attribute records of each laptop model and the pattern
//! tables used to recognize them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Refresh rate every panel in the product line can drop to.
const BASE_REFRESH_RATE: u32 = 60;

/// Known model classes, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ModelClass {
    /// AMD processor paired with a discrete Radeon GPU (Framework 16)
    #[serde(rename = "16_AMD")]
    DiscreteAmd,
    /// AMD processor with integrated graphics only (Framework 13)
    #[serde(rename = "13_AMD")]
    IntegratedAmd,
    /// Intel processor with integrated graphics (Framework 13)
    #[serde(rename = "13_INTEL")]
    IntegratedIntel,
}

impl ModelClass {
    /// All classes in the order the detector tries them
    pub const ALL: [ModelClass; 3] = [
        ModelClass::DiscreteAmd,
        ModelClass::IntegratedAmd,
        ModelClass::IntegratedIntel,
    ];

    /// Catalog identifier for this class
    pub fn id(&self) -> &'static str {
        match self {
            ModelClass::DiscreteAmd => "16_AMD",
            ModelClass::IntegratedAmd => "13_AMD",
            ModelClass::IntegratedIntel => "13_INTEL",
        }
    }
}

impl fmt::Display for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ModelClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelClass::ALL
            .into_iter()
            .find(|class| class.id() == s)
            .ok_or_else(|| format!("Unknown model class: {}", s))
    }
}

/// GPU signature groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GpuClass {
    /// Discrete Radeon RX 7700S module
    #[serde(rename = "discrete")]
    Discrete,
    /// Radeon 780M integrated graphics. `lspci` reports the Phoenix1 die
    /// name for it and for the 760M.
    #[serde(rename = "integrated_780m")]
    IntegratedA,
    /// Radeon 760M integrated graphics
    #[serde(rename = "integrated_760m")]
    IntegratedB,
}

impl GpuClass {
    /// All GPU groups in evaluation order
    pub const ALL: [GpuClass; 3] = [
        GpuClass::Discrete,
        GpuClass::IntegratedA,
        GpuClass::IntegratedB,
    ];

    /// Label used in the catalog document
    pub fn label(&self) -> &'static str {
        match self {
            GpuClass::Discrete => "discrete",
            GpuClass::IntegratedA => "integrated_780m",
            GpuClass::IntegratedB => "integrated_760m",
        }
    }
}

/// Built-in display panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySpec {
    /// Diagonal in inches
    pub size: f64,
    /// Native resolution, e.g. "2560x1600"
    pub resolution: String,
    /// Aspect ratio, e.g. "16:10"
    pub aspect_ratio: String,
    /// Maximum refresh rate in Hz
    pub refresh_rate: u32,
}

/// Memory limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RamSpec {
    /// Maximum supported capacity in GB
    pub max_gb: u32,
    /// Memory type, e.g. "DDR5"
    #[serde(rename = "type")]
    pub kind: String,
    /// Transfer rate in MT/s
    pub speed_mts: u32,
}

/// Storage slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSpec {
    pub slots: u8,
    /// Connector type, e.g. "M.2 2280 NVMe"
    pub connector: String,
}

/// Sustained power envelope in watts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdpRange {
    pub min: u32,
    pub max: u32,
}

impl TdpRange {
    /// Clamp a requested power limit into the envelope
    pub fn clamp(&self, watts: u32) -> u32 {
        watts.clamp(self.min, self.max)
    }
}

/// Attribute record for one laptop model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Identifier, taken from the key of the `models` map
    #[serde(skip)]
    pub id: String,

    /// Human-readable model name
    pub name: String,

    /// Processor names shipped in this model
    #[serde(default)]
    pub processors: Vec<String>,

    pub display: DisplaySpec,
    pub ram: RamSpec,
    pub storage: StorageSpec,

    /// Number of expansion card bays
    pub expansion_ports: u8,

    /// Battery capacity in Wh
    pub battery: f64,

    pub tdp: TdpRange,

    /// Whether a discrete GPU is fitted
    pub has_dgpu: bool,

    /// Discrete GPU name; present exactly when `has_dgpu` is set
    #[serde(default)]
    pub gpu: Option<String>,
}

impl ModelRecord {
    /// Class of this record, if its id is one of the known models
    pub fn model_class(&self) -> Option<ModelClass> {
        self.id.parse().ok()
    }

    /// Refresh rates the panel can be switched between, ascending
    pub fn supported_refresh_rates(&self) -> Vec<u32> {
        let mut rates = vec![BASE_REFRESH_RATE, self.display.refresh_rate];
        rates.sort_unstable();
        rates.dedup();
        rates
    }

    /// Check the record's internal invariants
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        match (self.has_dgpu, &self.gpu) {
            (true, None) => {
                return Err(format!("model '{}' has_dgpu is true but gpu is null", self.id))
            }
            (false, Some(gpu)) => {
                return Err(format!(
                    "model '{}' has_dgpu is false but gpu is '{}'",
                    self.id, gpu
                ))
            }
            _ => {}
        }
        if self.tdp.min > self.tdp.max {
            return Err(format!(
                "model '{}' tdp min {}W exceeds max {}W",
                self.id, self.tdp.min, self.tdp.max
            ));
        }
        Ok(())
    }
}

/// Regex tables used only for classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternTable {
    /// Model id to processor descriptor patterns
    #[serde(default)]
    pub cpu: BTreeMap<String, Vec<String>>,

    /// GPU group to graphics adapter descriptor patterns
    #[serde(default)]
    pub gpu: BTreeMap<GpuClass, Vec<String>>,
}

impl Default for PatternTable {
    fn default() -> Self {
        let cpu = [
            (
                ModelClass::DiscreteAmd,
                &[r"AMD Ryzen [79] 7[89]40HS", r"Ryzen.*7[89]40HS"][..],
            ),
            (
                ModelClass::IntegratedAmd,
                &[r"AMD Ryzen [57] 7[68]40U", r"Ryzen.*7[68]40U"][..],
            ),
            (
                ModelClass::IntegratedIntel,
                &[
                    r"1[1-3]th Gen Intel",
                    r"Intel.*Core.*i[3579]-1[1-3]\d{2}",
                    r"Intel.*Core.*Ultra [579]",
                ][..],
            ),
        ]
        .into_iter()
        .map(|(class, patterns)| {
            (
                class.id().to_string(),
                patterns.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect();

        let gpu = [
            (GpuClass::Discrete, &[r"RX\s*7700S", r"Radeon.*7700S"][..]),
            (
                GpuClass::IntegratedA,
                &[r"Radeon.*780M", r"\b780M\b", r"\bPhoenix1\b"][..],
            ),
            (GpuClass::IntegratedB, &[r"Radeon.*760M", r"\b760M\b"][..]),
        ]
        .into_iter()
        .map(|(class, patterns)| (class, patterns.iter().map(|p| p.to_string()).collect()))
        .collect();

        Self { cpu, gpu }
    }
}

/// Root of the catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub models: BTreeMap<String, ModelRecord>,

    #[serde(default)]
    pub patterns: PatternTable,

    /// Power and fan presets, consumed elsewhere
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub profiles: serde_json::Value,
}
