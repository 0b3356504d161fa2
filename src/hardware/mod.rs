// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware descriptor queries
//!
//! The detector only sees the [`HardwareProvider`] trait. [`SystemHardware`]
//! reads the running host, [`StaticHardware`] replays fixed strings.

pub mod provider;
pub mod system;

pub use provider::*;
pub use system::SystemHardware;
