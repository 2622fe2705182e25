//! Configuration for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulator instance:
//! 1. **Defaults:** The baseline memory map (text, data, stack regions) and
//!    text base address.
//! 2. **Structures:** The memory-region table supplied to [`crate::soc::Memory`].
//!
//! Configuration is supplied as JSON or built with `Config::default()` for
//! the CLI. The region table is fixed at construction and never renegotiated
//! at runtime.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline memory map when not explicitly
/// overridden in a configuration file.
mod defaults {
    /// Base address of the instruction (text) segment.
    ///
    /// Programs are loaded contiguously starting here, and the program
    /// counter resets to this address.
    pub const TEXT_BASE: u32 = 0x0040_0000;

    /// Size of the instruction segment (64 KiB).
    pub const TEXT_SIZE: u32 = 0x0001_0000;

    /// Base address of the data segment.
    pub const DATA_BASE: u32 = 0x1001_0000;

    /// Size of the data segment (64 KiB).
    pub const DATA_SIZE: u32 = 0x0001_0000;

    /// Base address of the stack segment.
    pub const STACK_BASE: u32 = 0x7FF0_0000;

    /// Size of the stack segment (64 KiB).
    pub const STACK_SIZE: u32 = 0x0001_0000;
}

/// One entry of the configured memory-region table.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionConfig {
    /// Region name (e.g. "text", "data", "stack").
    pub name: String,

    /// First address of the region.
    pub base: u32,

    /// Region size in bytes.
    pub size: u32,
}

impl RegionConfig {
    /// Creates a region entry.
    pub fn new(name: &str, base: u32, size: u32) -> Self {
        Self {
            name: name.to_owned(),
            base,
            size,
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pipesim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.text_base, 0x0040_0000);
/// assert_eq!(config.regions.len(), 3);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use pipesim_core::config::Config;
///
/// let json = r#"{
///     "text_base": 4096,
///     "regions": [
///         { "name": "text", "base": 4096, "size": 8192 },
///         { "name": "data", "base": 65536, "size": 8192 }
///     ]
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.text_base, 4096);
/// assert_eq!(config.regions[1].name, "data");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base address where program words are loaded and the PC resets.
    #[serde(default = "Config::default_text_base")]
    pub text_base: u32,

    /// The named, non-overlapping memory-region table.
    #[serde(default = "Config::default_regions")]
    pub regions: Vec<RegionConfig>,
}

impl Config {
    /// Returns the default text base address.
    fn default_text_base() -> u32 {
        defaults::TEXT_BASE
    }

    /// Returns the default three-region memory map.
    fn default_regions() -> Vec<RegionConfig> {
        vec![
            RegionConfig::new("text", defaults::TEXT_BASE, defaults::TEXT_SIZE),
            RegionConfig::new("data", defaults::DATA_BASE, defaults::DATA_SIZE),
            RegionConfig::new("stack", defaults::STACK_BASE, defaults::STACK_SIZE),
        ]
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_base: Self::default_text_base(),
            regions: Self::default_regions(),
        }
    }
}
