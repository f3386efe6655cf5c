//! ALU arithmetic operations.
//!
//! Implements integer addition and subtraction for the RV32 datapath.
//! All arithmetic wraps modulo 2^32, per the RISC-V spec (§2.4); overflow
//! is never trapped.

use crate::core::control::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
