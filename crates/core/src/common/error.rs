//! Error definitions.
//!
//! This module defines the error handling for the simulator's outer layer.
//! The datapath itself is total (any instruction word executes, malformed
//! encodings decode to a no-op), so errors arise only while setting a run
//! up: reading configuration, sizing memory, and loading program images.

use thiserror::Error;

/// Errors produced while configuring or loading the simulator.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file did not parse as JSON.
    #[error("failed to parse config {path}: {source}")]
    Config {
        /// Path of the configuration file.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A memory size was requested that the address decoder cannot serve.
    #[error("invalid memory size: {0} words (must be a nonzero power of two)")]
    InvalidMemorySize(usize),

    /// A program image could not be parsed as an ELF executable.
    #[error("failed to parse ELF image: {0}")]
    BadImage(String),

    /// A program image targets an architecture other than RV32.
    #[error("unsupported image architecture (expected RISC-V 32-bit)")]
    WrongArchitecture,

    /// A program image does not fit into the configured memory.
    #[error("image segment at {addr:#010x} ({len} bytes) exceeds memory of {capacity} bytes")]
    ImageTooLarge {
        /// Load address of the offending segment.
        addr: u32,
        /// Segment length in bytes.
        len: usize,
        /// Total memory capacity in bytes.
        capacity: usize,
    },
}
