//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline hardware constants (reset PC, memory size).
//! 2. **Structures:** Hierarchical config for general settings and memory.
//!
//! Configuration is supplied via JSON (see [`Config::from_json_file`]) or
//! use `Config::default()` for the built-in baseline.

use serde::Deserialize;

use crate::common::error::CoreError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden in JSON configuration files.
mod defaults {
    /// Initial program counter after reset.
    ///
    /// The fetch unit starts executing at this byte address. Flat images
    /// are conventionally loaded here.
    pub const START_PC: u32 = 0x0000_0000;

    /// Total size of data memory in 32-bit words (64 KiB).
    ///
    /// Must be a power of two: the address decoder masks word indices by
    /// `RAM_WORDS - 1`, so higher address bits wrap.
    pub const RAM_WORDS: usize = 16384;
}

/// Root simulator configuration.
///
/// # Examples
///
/// ```
/// use rv32sc_core::Config;
///
/// let json = r#"{
///     "general": { "start_pc": 4096 },
///     "memory": { "ram_words": 1024 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.general.start_pc, 4096);
/// assert_eq!(config.memory.ram_words, 1024);
/// assert!(!config.general.trace_instructions);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Reads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a partial file (or
    /// `{}`) is valid.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read and
    /// [`CoreError::Config`] if it does not parse.
    pub fn from_json_file(path: &str) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CoreError::Config {
            path: path.to_string(),
            source,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

/// General simulation settings and options.
///
/// Contains high-level simulation configuration such as the initial
/// program counter and instruction tracing.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-instruction debug events on the `tracing` subscriber
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to address zero)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Main memory configuration.
///
/// Sizes the word-granular data memory. The word count must be a nonzero
/// power of two; [`crate::mem::Ram::new`] rejects anything else.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Data memory capacity in 32-bit words
    #[serde(default = "MemoryConfig::default_ram_words")]
    pub ram_words: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity in words.
    fn default_ram_words() -> usize {
        defaults::RAM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_words: defaults::RAM_WORDS,
        }
    }
}
