// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Ordered classification rules
//!
//! Processor rules run first, in [`ModelClass::ALL`] order. A processor
//! match is only committed when the graphics adapters corroborate it.
//! Substring fallbacks run only when no processor rule matched at all.

use std::fmt;

use serde::Serialize;

use crate::catalog::{CompiledPatterns, GpuClass, ModelClass};

/// Which GPU groups were seen among the adapters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GpuFlags {
    pub discrete: bool,
    pub integrated_a: bool,
    pub integrated_b: bool,
}

impl GpuFlags {
    /// Test every adapter against every GPU group
    pub fn from_adapters<S: AsRef<str>>(patterns: &CompiledPatterns, adapters: &[S]) -> Self {
        let mut flags = Self::default();
        for adapter in adapters {
            let adapter = adapter.as_ref();
            for class in GpuClass::ALL {
                if patterns.gpu_matches(class, adapter) {
                    flags.set(class);
                }
            }
        }
        flags
    }

    fn set(&mut self, class: GpuClass) {
        match class {
            GpuClass::Discrete => self.discrete = true,
            GpuClass::IntegratedA => self.integrated_a = true,
            GpuClass::IntegratedB => self.integrated_b = true,
        }
    }

    pub fn has_integrated(&self) -> bool {
        self.integrated_a || self.integrated_b
    }
}

/// Outcome of a single processor rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Processor matched and the adapters agree
    Commit,
    /// Processor matched but the expected adapters are missing
    Reject(&'static str),
    /// Processor did not match this rule
    Pass,
}

/// Processor pattern rule with GPU corroboration
#[derive(Clone, Copy)]
pub struct CpuRule {
    pub class: ModelClass,
    corroborate: fn(&GpuFlags) -> Result<(), &'static str>,
}

impl fmt::Debug for CpuRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuRule").field("class", &self.class).finish()
    }
}

impl CpuRule {
    pub fn evaluate(&self, patterns: &CompiledPatterns, processor: &str, flags: &GpuFlags) -> Verdict {
        if !patterns.cpu_matches(self.class.id(), processor) {
            return Verdict::Pass;
        }
        match (self.corroborate)(flags) {
            Ok(()) => Verdict::Commit,
            Err(reason) => Verdict::Reject(reason),
        }
    }
}

fn requires_discrete(flags: &GpuFlags) -> Result<(), &'static str> {
    if flags.discrete {
        Ok(())
    } else {
        Err("no discrete GPU found")
    }
}

fn requires_integrated_only(flags: &GpuFlags) -> Result<(), &'static str> {
    if flags.discrete {
        Err("unexpected discrete GPU found")
    } else if !flags.has_integrated() {
        Err("no integrated GPU found")
    } else {
        Ok(())
    }
}

fn unconditional(_: &GpuFlags) -> Result<(), &'static str> {
    Ok(())
}

/// Processor rules in priority order
pub const CPU_RULES: [CpuRule; 3] = [
    CpuRule {
        class: ModelClass::DiscreteAmd,
        corroborate: requires_discrete,
    },
    CpuRule {
        class: ModelClass::IntegratedAmd,
        corroborate: requires_integrated_only,
    },
    CpuRule {
        class: ModelClass::IntegratedIntel,
        corroborate: unconditional,
    },
];

/// Literal processor token that identifies a model on its own
#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    pub token: &'static str,
    pub class: ModelClass,
}

impl FallbackRule {
    pub fn evaluate(&self, processor: &str) -> bool {
        processor.contains(self.token)
    }
}

/// Substring fallbacks in priority order
pub const FALLBACK_RULES: [FallbackRule; 2] = [
    FallbackRule {
        token: "7840HS",
        class: ModelClass::DiscreteAmd,
    },
    FallbackRule {
        token: "7640U",
        class: ModelClass::IntegratedAmd,
    },
];

/// How a model was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Processor pattern plus GPU corroboration
    Pattern,
    /// Literal processor token only
    Fallback,
}

/// Committed classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub class: ModelClass,
    pub confidence: Confidence,
}

/// Full trace of one classification pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub flags: GpuFlags,
    /// Rules whose processor pattern matched but were not corroborated
    pub rejected: Vec<ModelClass>,
    pub matched: Option<Match>,
}

impl Classification {
    pub fn class(&self) -> Option<ModelClass> {
        self.matched.map(|m| m.class)
    }
}

/// Classify raw descriptors against the compiled pattern tables
pub fn classify<S: AsRef<str>>(
    patterns: &CompiledPatterns,
    processor: &str,
    adapters: &[S],
) -> Classification {
    let flags = GpuFlags::from_adapters(patterns, adapters);
    let mut rejected = Vec::new();

    for rule in CPU_RULES {
        match rule.evaluate(patterns, processor, &flags) {
            Verdict::Commit => {
                tracing::debug!("Processor '{}' classified as {}", processor, rule.class);
                return Classification {
                    flags,
                    rejected,
                    matched: Some(Match {
                        class: rule.class,
                        confidence: Confidence::Pattern,
                    }),
                };
            }
            Verdict::Reject(reason) => {
                tracing::warn!(
                    "Processor '{}' looks like {} but {}; not trusting the match",
                    processor,
                    rule.class,
                    reason
                );
                rejected.push(rule.class);
            }
            Verdict::Pass => {}
        }
    }

    let matched = if rejected.is_empty() {
        FALLBACK_RULES
            .iter()
            .find(|rule| rule.evaluate(processor))
            .map(|rule| {
                tracing::info!(
                    "Processor '{}' contains '{}', falling back to {}",
                    processor,
                    rule.token,
                    rule.class
                );
                Match {
                    class: rule.class,
                    confidence: Confidence::Fallback,
                }
            })
    } else {
        None
    };

    Classification {
        flags,
        rejected,
        matched,
    }
}
