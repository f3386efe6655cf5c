//! RISC-V architecture-specific components.
//!
//! This module contains the implementation of core RISC-V architectural
//! elements. For the RV32I base integer subset that means the
//! general-purpose register file; the `x0` zero-register invariant lives
//! here rather than in the datapath.

/// General-Purpose Register file implementation.
pub mod gpr;
