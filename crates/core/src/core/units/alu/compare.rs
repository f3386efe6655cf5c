//! ALU comparison operations.
//!
//! Implements set-less-than (signed and unsigned) and the six branch
//! predicates. Set-less-than produces a 0/1 register result; the branch
//! predicates produce the taken flag consumed by the external fetch unit.

use crate::core::control::AluOp;

/// Executes a set-less-than comparison.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (`Slt` or `Sltu`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// `1` if the comparison holds, `0` otherwise (and `0` for non-comparison
/// opcodes).
pub fn set_less_than(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        _ => 0,
    }
}

/// Evaluates a branch predicate.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a branch variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The branch-taken flag. Returns `false` for non-branch opcodes.
pub fn branch_taken(op: AluOp, a: u32, b: u32) -> bool {
    match op {
        AluOp::Beq => a == b,
        AluOp::Bne => a != b,
        AluOp::Blt => (a as i32) < (b as i32),
        AluOp::Bge => (a as i32) >= (b as i32),
        AluOp::Bltu => a < b,
        AluOp::Bgeu => a >= b,
        _ => false,
    }
}
