//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the fused ALU/branch unit of the single-cycle
//! datapath. It handles standard arithmetic, logical operations, shifts,
//! and the branch comparisons, producing both a 32-bit result and the
//! branch-taken flag in one evaluation.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Xor
//! - [`shifts`]:     Sll, Srl, Sra
//! - [`compare`]:    Slt, Sltu, and the six branch predicates

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Comparison operations (set-less-than, branch predicates).
pub mod compare;

/// Bitwise logical operations (and, or, xor).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::control::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements all RV32I integer arithmetic and logical operations
/// including addition, subtraction, shifts, and comparisons. Branch
/// comparisons are fused into the same unit: they produce a zero result
/// and drive the taken flag instead.
pub struct Alu;

impl Alu {
    /// Evaluates one ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type
    /// and pairs the 32-bit result with the branch-taken flag. The flag is
    /// `false` for every non-comparison operation; comparison operations
    /// produce a zero result.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also used as shift amount)
    ///
    /// # Returns
    ///
    /// The `(result, branch_taken)` pair for the cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sc_core::core::units::alu::Alu;
    /// use rv32sc_core::core::control::AluOp;
    ///
    /// // Wrapping addition
    /// let (result, taken) = Alu::evaluate(AluOp::Add, 0x7FFF_FFFF, 1);
    /// assert_eq!(result, 0x8000_0000);
    /// assert!(!taken);
    ///
    /// // Logical shift left
    /// let (result, _) = Alu::evaluate(AluOp::Sll, 0x1, 4);
    /// assert_eq!(result, 0x10);
    ///
    /// // Signed comparison
    /// let (result, _) = Alu::evaluate(AluOp::Slt, -5_i32 as u32, 10);
    /// assert_eq!(result, 1); // -5 < 10
    ///
    /// // Branch comparison: zero result, flag carries the outcome
    /// let (result, taken) = Alu::evaluate(AluOp::Bne, 7, 8);
    /// assert_eq!(result, 0);
    /// assert!(taken);
    /// ```
    pub fn evaluate(op: AluOp, a: u32, b: u32) -> (u32, bool) {
        match op {
            // Pass-through: LUI immediates, and the inert illegal word.
            AluOp::PassB | AluOp::Illegal => (b, false),

            // Arithmetic: add, sub
            AluOp::Add | AluOp::Sub => (arithmetic::execute(op, a, b), false),

            // Logic: and, or, xor
            AluOp::And | AluOp::Or | AluOp::Xor => (logic::execute(op, a, b), false),

            // Shifts: sll, srl, sra
            AluOp::Sll | AluOp::Srl | AluOp::Sra => (shifts::execute(op, a, b), false),

            // Comparisons writing a 0/1 result: slt, sltu
            AluOp::Slt | AluOp::Sltu => (compare::set_less_than(op, a, b), false),

            // Branch predicates: zero result, outcome on the taken flag.
            AluOp::Beq | AluOp::Bne | AluOp::Blt | AluOp::Bge | AluOp::Bltu | AluOp::Bgeu => {
                (0, compare::branch_taken(op, a, b))
            }
        }
    }
}
