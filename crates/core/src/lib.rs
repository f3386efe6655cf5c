//! Single-cycle RV32I processor core library.
//!
//! This crate implements the execution and memory core of a single-cycle
//! RV32I processor with the following:
//! 1. **Core:** Instruction decoder, control word, ALU, immediate extender,
//!    register file, and the combinational datapath that wires them per cycle.
//! 2. **Load/store:** Store manager (byte-mask generation) and load extender
//!    (lane select plus sign/zero extension) over word-granular memory.
//! 3. **ISA:** RV32I field extraction and opcode/funct encoding tables.
//! 4. **Memory:** Byte-maskable word RAM with power-of-two sizing.
//! 5. **Simulation:** ELF/flat-image loader, PC sequencing, configuration,
//!    and statistics collection.

/// Common types and errors shared across the crate.
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// Processor core (decode, control, ALU, register file, datapath).
pub mod core;
/// Instruction set (field extraction, RV32I encoding tables).
pub mod isa;
/// Word-granular byte-maskable memory.
pub mod mem;
/// Program loader and instruction-level simulator loop.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Single-cycle datapath; owns the register file and data memory.
pub use crate::core::Datapath;
/// Instruction-level simulator; owns a datapath and sequences the PC.
pub use crate::sim::Simulator;
