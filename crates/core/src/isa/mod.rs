//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and field extraction,
//! covering the RV32I base integer instruction set.
//!
//! # Structure
//!
//! * `instruction`: Bit extraction utilities shared by the decoder and tests.
//! * `rv32i`: Base Integer Instruction Set (32-bit) encoding tables.

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
