//! Core processor implementation.
//!
//! This module contains the single-cycle core: the instruction decoder, the
//! control word it produces, the functional units, the register file, and
//! the datapath that coordinates all components per cycle.

/// Architecture-specific components (register file).
pub mod arch;

/// Control word and operation type definitions.
pub mod control;

/// Single-cycle datapath and per-cycle outputs.
pub mod datapath;

/// Instruction decoder producing control words.
pub mod decode;

/// Execution units (ALU, immediate extender, LSU).
pub mod units;

pub use self::datapath::{CycleOutputs, Datapath};
