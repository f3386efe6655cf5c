//! Execution units and functional components.
//!
//! This module contains implementations of the datapath's functional units:
//! the fused ALU/branch unit, the immediate extender, and the load/store
//! unit that adapts register values to word-granular memory.

/// Arithmetic Logic Unit with fused branch comparison.
pub mod alu;

/// Immediate extender for all RV32I instruction formats.
pub mod imm;

/// Load/Store Unit (store manager and load extender).
pub mod lsu;
