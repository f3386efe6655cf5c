//! Simulation utilities and program loading.
//!
//! Provides utilities for loading program images into memory and the
//! instruction-level simulator loop that sequences the PC around the
//! single-cycle datapath.

/// ELF and flat-image program loading.
pub mod loader;

/// Instruction-level simulator loop.
pub mod simulator;

pub use self::simulator::{HaltReason, Simulator};
