//! Configuration system for the MMU simulator.
//!
//! This module defines the configuration structure used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline page, frame, TLB and timing constants.
//! 2. **Structures:** A flat [`Config`] supplied once at session start.
//! 3. **Enums:** The TLB insertion policy.
//!
//! Configuration is supplied as JSON (see [`Config::from_json_str`]) or built
//! with `Config::default()` and struct update syntax.

use serde::{Deserialize, Serialize};

use crate::common::constants::{MAX_FRAMES, MAX_PAGES, MAX_TLB};
use crate::common::{Error, Result};

/// Default configuration constants for the simulator.
mod defaults {
    /// Page size in bytes (1 KiB).
    pub const PAGE_SIZE: u64 = 1024;

    /// Number of logical pages.
    pub const NUM_PAGES: usize = 8;

    /// Number of physical frames.
    pub const NUM_FRAMES: usize = 4;

    /// Translation Lookaside Buffer entry count.
    pub const TLB_SIZE: usize = 4;

    /// Main memory access time in nanoseconds.
    pub const MEMORY_ACCESS_TIME: f64 = 100.0;

    /// TLB access time in nanoseconds.
    pub const TLB_ACCESS_TIME: f64 = 20.0;
}

/// TLB insertion policies.
///
/// Selects the slot that receives a new mapping after a TLB miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum TlbPolicy {
    /// Every miss overwrites slot 0; the remaining slots are never filled.
    #[default]
    FixedSlotZero,
    /// Misses fill slots in rotating order, wrapping after the last slot.
    RoundRobin,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use mmusim_core::config::{Config, TlbPolicy};
///
/// let json = r#"{
///     "page_size": 256,
///     "num_pages": 16,
///     "num_frames": 3,
///     "tlb_size": 2,
///     "memory_access_time": 100.0,
///     "tlb_access_time": 10.0,
///     "tlb_policy": "RoundRobin"
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.page_size, 256);
/// assert_eq!(config.tlb_policy, TlbPolicy::RoundRobin);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Page (and frame) size in bytes.
    pub page_size: u64,
    /// Number of logical pages in the address space.
    pub num_pages: usize,
    /// Number of physical frames.
    pub num_frames: usize,
    /// Number of TLB slots; zero disables the TLB.
    pub tlb_size: usize,
    /// Main memory access time (ns).
    pub memory_access_time: f64,
    /// TLB access time (ns).
    pub tlb_access_time: f64,
    /// Slot selection on TLB miss.
    pub tlb_policy: TlbPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: defaults::PAGE_SIZE,
            num_pages: defaults::NUM_PAGES,
            num_frames: defaults::NUM_FRAMES,
            tlb_size: defaults::TLB_SIZE,
            memory_access_time: defaults::MEMORY_ACCESS_TIME,
            tlb_access_time: defaults::TLB_ACCESS_TIME,
            tlb_policy: TlbPolicy::default(),
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] on malformed input and
    /// [`Error::InvalidConfiguration`] if a value is out of bounds.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against the simulator's capacity bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size", "must be positive"));
        }
        check_count("num_pages", self.num_pages, 1, MAX_PAGES)?;
        check_count("num_frames", self.num_frames, 1, MAX_FRAMES)?;
        check_count("tlb_size", self.tlb_size, 0, MAX_TLB)?;
        let widest = self.num_pages.max(self.num_frames) as u64;
        if self.page_size.checked_mul(widest).is_none() {
            return Err(Error::config(
                "page_size",
                format!(
                    "{} bytes over {widest} pages or frames overflows a 64-bit address",
                    self.page_size
                ),
            ));
        }
        check_time("memory_access_time", self.memory_access_time)?;
        check_time("tlb_access_time", self.tlb_access_time)?;
        Ok(())
    }

    /// Size of the logical address space in bytes.
    ///
    /// Saturates for configurations that have not been validated.
    pub const fn address_space(&self) -> u64 {
        self.page_size.saturating_mul(self.num_pages as u64)
    }
}

fn check_count(field: &'static str, value: usize, min: usize, max: usize) -> Result<()> {
    if value < min || value > max {
        return Err(Error::config(
            field,
            format!("must be in {min}..={max}, got {value}"),
        ));
    }
    Ok(())
}

fn check_time(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::config(
            field,
            format!("must be a positive finite time, got {value}"),
        ));
    }
    Ok(())
}
