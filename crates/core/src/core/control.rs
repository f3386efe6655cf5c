//! Datapath control word and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Categorizes the fused ALU/branch operations.
//! 2. **Operand Selection:** Defines sources for ALU inputs (registers, PC, or immediates).
//! 3. **Memory Control:** Specifies access widths and sign-extension requirements.
//! 4. **Writeback Control:** Selects the value committed to the register file.

/// Fused ALU and branch-comparison operation types.
///
/// Comparison variants (`Beq` through `Bgeu`) drive the branch-taken flag
/// and produce a zero result; all other variants produce a result and leave
/// the flag clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Unrecognized encoding. Behaves as [`AluOp::PassB`] so the datapath
    /// stays combinationally defined, with every commit gated off.
    #[default]
    Illegal,

    /// Pass operand B through unchanged.
    PassB,

    /// Integer addition (wrapping).
    Add,

    /// Integer subtraction (wrapping).
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Branch if equal.
    Beq,

    /// Branch if not equal.
    Bne,

    /// Branch if less than (signed).
    Blt,

    /// Branch if greater or equal (signed).
    Bge,

    /// Branch if less than unsigned.
    Bltu,

    /// Branch if greater or equal unsigned.
    Bgeu,
}

/// Immediate format selector for the immediate extender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImmFormat {
    /// 12-bit sign-extended immediate (loads, JALR, OP-IMM).
    #[default]
    I,

    /// 5-bit zero-extended shift amount (SLLI, SRLI, SRAI).
    IShamt,

    /// Upper 20 bits, low 12 zero (LUI, AUIPC).
    U,

    /// 21-bit sign-extended jump offset (JAL).
    Jal,

    /// 12-bit sign-extended store offset (S-type).
    S,

    /// 13-bit sign-extended branch offset (B-type).
    B,
}

/// Memory access width for load and store operations.
///
/// Unsigned variants select zero extension on the load path; the store
/// path treats them identically to their signed counterparts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 32-bit word access.
    #[default]
    Word,

    /// 16-bit half-word access (sign-extending load).
    Half,

    /// 16-bit half-word access (zero-extending load).
    HalfU,

    /// 8-bit byte access (sign-extending load).
    Byte,

    /// 8-bit byte access (zero-extending load).
    ByteU,
}

/// Source of the value committed to the destination register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSrc {
    /// ALU result.
    #[default]
    Alu,

    /// Link address (PC + 4) for JAL/JALR.
    PcPlus4,

    /// Extended load data from memory.
    Mem,
}

/// Control word produced by the decoder for one instruction.
///
/// `ControlWord::default()` is the inert word: no register write, no memory
/// access, [`AluOp::Illegal`]. The decoder returns it for every encoding it
/// does not recognize, so a malformed instruction executes as a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlWord {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Immediate format the extender reassembles.
    pub imm: ImmFormat,
    /// Operand A is the PC (else the `rs1` value).
    pub use_pc: bool,
    /// Operand B is the extended immediate (else the `rs2` value).
    pub use_imm: bool,
    /// Width of memory access.
    pub width: MemWidth,
    /// Source of the writeback value.
    pub wb_src: WbSrc,
}
