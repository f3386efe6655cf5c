//! Instruction decoder.
//!
//! This module converts raw 32-bit instruction bits into the control word
//! that drives the datapath. It performs the following:
//! 1. **Classification:** Maps the major opcode to an instruction class.
//! 2. **Operation Selection:** Resolves funct3 (and funct7 bit 5) to the ALU operation.
//! 3. **Format Selection:** Picks the immediate format the extender reassembles.
//! 4. **Commit Gating:** Sets the register/memory write enables for the class.
//!
//! Decoding is total: any encoding outside the recognized RV32I subset yields
//! the inert [`ControlWord::default()`], which executes as a no-op.

use crate::core::control::{AluOp, ControlWord, ImmFormat, MemWidth, WbSrc};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, opcodes};

/// Bit 5 of funct7 field indicating alternate encoding (e.g., SUB vs ADD).
///
/// When set, selects the alternate R-type operation (e.g., SRA instead of SRL).
const FUNCT7_ALT_BIT: u32 = 0x20;

/// Decodes one instruction into its control word.
///
/// The returned word fully determines the datapath for the cycle: ALU
/// operation, immediate format, operand sources, memory access, and
/// writeback. Unrecognized opcodes, and recognized opcodes with an
/// undefined funct3, return `ControlWord::default()`.
pub fn decode(inst: u32) -> ControlWord {
    let mut c = ControlWord {
        alu: AluOp::Add,
        ..ControlWord::default()
    };

    match inst.opcode() {
        opcodes::OP_LUI => {
            c.reg_write = true;
            c.alu = AluOp::PassB;
            c.imm = ImmFormat::U;
            c.use_imm = true;
        }
        opcodes::OP_AUIPC => {
            c.reg_write = true;
            c.imm = ImmFormat::U;
            c.use_pc = true;
            c.use_imm = true;
        }
        opcodes::OP_JAL => {
            c.reg_write = true;
            c.imm = ImmFormat::Jal;
            c.use_pc = true;
            c.use_imm = true;
            c.wb_src = WbSrc::PcPlus4;
        }
        opcodes::OP_JALR => {
            if inst.funct3() != funct3::JALR {
                return ControlWord::default();
            }
            c.reg_write = true;
            c.use_imm = true;
            c.wb_src = WbSrc::PcPlus4;
        }
        opcodes::OP_BRANCH => {
            c.imm = ImmFormat::B;
            c.alu = match inst.funct3() {
                funct3::BEQ => AluOp::Beq,
                funct3::BNE => AluOp::Bne,
                funct3::BLT => AluOp::Blt,
                funct3::BGE => AluOp::Bge,
                funct3::BLTU => AluOp::Bltu,
                funct3::BGEU => AluOp::Bgeu,
                _ => return ControlWord::default(),
            };
        }
        opcodes::OP_LOAD => {
            c.reg_write = true;
            c.mem_read = true;
            c.use_imm = true;
            c.wb_src = WbSrc::Mem;
            c.width = match inst.funct3() {
                funct3::LB => MemWidth::Byte,
                funct3::LH => MemWidth::Half,
                funct3::LW => MemWidth::Word,
                funct3::LBU => MemWidth::ByteU,
                funct3::LHU => MemWidth::HalfU,
                _ => return ControlWord::default(),
            };
        }
        opcodes::OP_STORE => {
            c.mem_write = true;
            c.imm = ImmFormat::S;
            c.use_imm = true;
            c.width = match inst.funct3() {
                funct3::SB => MemWidth::Byte,
                funct3::SH => MemWidth::Half,
                funct3::SW => MemWidth::Word,
                _ => return ControlWord::default(),
            };
        }
        opcodes::OP_IMM => {
            c.reg_write = true;
            c.use_imm = true;
            let alt = inst.funct7() & FUNCT7_ALT_BIT != 0;
            c.alu = match inst.funct3() {
                funct3::ADD_SUB => AluOp::Add,
                funct3::SLL => {
                    c.imm = ImmFormat::IShamt;
                    AluOp::Sll
                }
                funct3::SLT => AluOp::Slt,
                funct3::SLTU => AluOp::Sltu,
                funct3::XOR => AluOp::Xor,
                funct3::SRL_SRA => {
                    c.imm = ImmFormat::IShamt;
                    if alt { AluOp::Sra } else { AluOp::Srl }
                }
                funct3::OR => AluOp::Or,
                _ => AluOp::And,
            };
        }
        opcodes::OP_REG => {
            c.reg_write = true;
            let alt = inst.funct7() & FUNCT7_ALT_BIT != 0;
            c.alu = match inst.funct3() {
                funct3::ADD_SUB => {
                    if alt { AluOp::Sub } else { AluOp::Add }
                }
                funct3::SLL => AluOp::Sll,
                funct3::SLT => AluOp::Slt,
                funct3::SLTU => AluOp::Sltu,
                funct3::XOR => AluOp::Xor,
                funct3::SRL_SRA => {
                    if alt { AluOp::Sra } else { AluOp::Srl }
                }
                funct3::OR => AluOp::Or,
                _ => AluOp::And,
            };
        }
        _ => return ControlWord::default(),
    }

    c
}
