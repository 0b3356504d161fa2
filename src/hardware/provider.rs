// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware descriptor providers

use crate::error::Result;

/// Source of raw hardware descriptor strings
#[cfg_attr(test, mockall::automock)]
pub trait HardwareProvider {
    /// Brand string of the primary processor
    fn processor(&self) -> Result<String>;

    /// Names of all graphics adapters, possibly none
    fn graphics_adapters(&self) -> Result<Vec<String>>;
}

/// Provider returning fixed descriptors
///
/// Used to replay descriptors captured on another machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHardware {
    pub processor: String,
    pub adapters: Vec<String>,
}

impl StaticHardware {
    pub fn new(processor: impl Into<String>, adapters: Vec<String>) -> Self {
        Self {
            processor: processor.into(),
            adapters,
        }
    }
}

impl HardwareProvider for StaticHardware {
    fn processor(&self) -> Result<String> {
        Ok(self.processor.clone())
    }

    fn graphics_adapters(&self) -> Result<Vec<String>> {
        Ok(self.adapters.clone())
    }
}

impl<P: HardwareProvider + ?Sized> HardwareProvider for Box<P> {
    fn processor(&self) -> Result<String> {
        (**self).processor()
    }

    fn graphics_adapters(&self) -> Result<Vec<String>> {
        (**self).graphics_adapters()
    }
}
