//! Physical data memory.
//!
//! This module implements the data memory seen by the load/store path. It
//! provides:
//! 1. **Ram:** Word-granular backing storage with byte-masked writes.
//! 2. **Image loading:** Helpers for placing program bytes and words.

/// Byte-maskable word RAM implementation.
pub mod ram;

pub use self::ram::Ram;
