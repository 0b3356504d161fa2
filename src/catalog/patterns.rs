// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compiled descriptor patterns

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use super::schema::{GpuClass, PatternTable};
use crate::error::{FwError, Result};

/// Compile a single pattern for case-insensitive, unanchored search
pub fn try_compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| FwError::PatternMatch {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// An ordered group of patterns; matches when any member matches
#[derive(Debug, Clone, Default)]
pub struct PatternGroup {
    regexes: Vec<Regex>,
    /// Patterns dropped because they failed to compile
    rejected: usize,
}

impl PatternGroup {
    /// Compile every pattern, skipping the ones that are not valid regexes
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut group = Self::default();
        for pattern in patterns {
            match try_compile(pattern.as_ref()) {
                Ok(regex) => group.regexes.push(regex),
                Err(e) => {
                    tracing::warn!("Skipping descriptor pattern: {}", e);
                    group.rejected += 1;
                }
            }
        }
        group
    }

    /// Search the descriptor for any pattern in the group
    pub fn is_match(&self, descriptor: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(descriptor))
    }

    /// Number of usable patterns
    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }

    /// Number of patterns that failed to compile
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

/// Pattern tables compiled once at catalog load
#[derive(Debug, Clone, Default)]
pub struct CompiledPatterns {
    cpu: BTreeMap<String, PatternGroup>,
    gpu: BTreeMap<GpuClass, PatternGroup>,
}

impl CompiledPatterns {
    pub fn compile(table: &PatternTable) -> Self {
        let cpu = table
            .cpu
            .iter()
            .map(|(id, patterns)| (id.clone(), PatternGroup::compile(patterns)))
            .collect();
        let gpu = table
            .gpu
            .iter()
            .map(|(class, patterns)| (*class, PatternGroup::compile(patterns)))
            .collect();
        Self { cpu, gpu }
    }

    /// Does the processor descriptor match the given model's CPU group?
    ///
    /// A model without a CPU group never matches.
    pub fn cpu_matches(&self, model_id: &str, processor: &str) -> bool {
        self.cpu
            .get(model_id)
            .is_some_and(|group| group.is_match(processor))
    }

    /// Does the adapter descriptor match the given GPU group?
    pub fn gpu_matches(&self, class: GpuClass, adapter: &str) -> bool {
        self.gpu
            .get(&class)
            .is_some_and(|group| group.is_match(adapter))
    }

    pub fn cpu_group(&self, model_id: &str) -> Option<&PatternGroup> {
        self.cpu.get(model_id)
    }

    pub fn gpu_group(&self, class: GpuClass) -> Option<&PatternGroup> {
        self.gpu.get(&class)
    }
}
