// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Descriptors of the running host

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
use std::process::Command;

use sysinfo::System;

use super::provider::HardwareProvider;
use crate::error::{FwError, Result};

/// Queries the host this process runs on
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHardware;

impl SystemHardware {
    pub fn new() -> Self {
        Self
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    fn run(program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| FwError::HardwareQueryFailed(format!("{}: {}", program, e)))?;
        if !output.status.success() {
            return Err(FwError::HardwareQueryFailed(format!(
                "{} exited with {}",
                program, output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl HardwareProvider for SystemHardware {
    fn processor(&self) -> Result<String> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        sys.cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .ok_or_else(|| FwError::HardwareQueryFailed("no processors reported".to_string()))
    }

    fn graphics_adapters(&self) -> Result<Vec<String>> {
        #[cfg(target_os = "linux")]
        {
            let output = Self::run("lspci", &["-mm"])?;
            return Ok(parse_lspci_mm(&output));
        }

        #[cfg(target_os = "windows")]
        {
            let output = Self::run(
                "powershell",
                &[
                    "-NoProfile",
                    "-NonInteractive",
                    "-Command",
                    "Get-CimInstance Win32_VideoController | Select-Object -ExpandProperty Name",
                ],
            )?;
            return Ok(parse_line_list(&output));
        }

        #[cfg(target_os = "macos")]
        {
            let output = Self::run("system_profiler", &["SPDisplaysDataType"])?;
            return Ok(parse_system_profiler(&output));
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            Err(FwError::HardwareQueryFailed(
                "graphics adapter listing is not supported on this platform".to_string(),
            ))
        }
    }
}

/// Split a `lspci -mm` line into its quoted fields
#[cfg_attr(not(any(test, target_os = "linux")), allow(dead_code))]
fn quoted_fields(line: &str) -> Vec<&str> {
    line.split('"')
        .skip(1)
        .step_by(2)
        .collect()
}

/// Display controllers from `lspci -mm` output, as "vendor device"
#[cfg_attr(not(any(test, target_os = "linux")), allow(dead_code))]
fn parse_lspci_mm(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let fields = quoted_fields(line);
            let class = fields.first()?;
            if !(class.contains("VGA") || class.contains("3D") || class.contains("Display")) {
                return None;
            }
            let vendor = fields.get(1).copied().unwrap_or_default();
            let device = fields.get(2).copied().unwrap_or_default();
            Some(format!("{} {}", vendor, device).trim().to_string())
        })
        .collect()
}

/// One adapter name per non-empty line
#[cfg_attr(not(any(test, target_os = "windows")), allow(dead_code))]
fn parse_line_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// "Chipset Model" rows from `system_profiler SPDisplaysDataType`
#[cfg_attr(not(any(test, target_os = "macos")), allow(dead_code))]
fn parse_system_profiler(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("Chipset Model:"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
