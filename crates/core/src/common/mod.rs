//! Common utilities and types used throughout the processor core.
//!
//! This module provides fundamental building blocks shared across the
//! crate's components. It includes:
//! 1. **Error Handling:** The error type covering the fallible outer layer
//!    (configuration, image loading, memory construction).

/// Error type definitions.
pub mod error;

pub use error::CoreError;
