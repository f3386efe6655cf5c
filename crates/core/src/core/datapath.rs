//! Single-cycle datapath.
//!
//! This module wires the functional units into one combinational cycle. It
//! performs the following:
//! 1. **Decode:** Converts the fetched instruction into its control word.
//! 2. **Operand Resolution:** Reads `rs1`/`rs2`, extends the immediate, and
//!    selects the ALU operands (register, PC, or immediate).
//! 3. **Execution:** Runs the fused ALU/branch unit and the target adder.
//! 4. **Memory Access:** Drives the store manager and load extender against
//!    the word-granular RAM.
//! 5. **Writeback:** Commits the selected result to the register file.
//!
//! Operand reads happen before the writeback commit, so an instruction never
//! observes its own register write within the cycle.

use crate::common::error::CoreError;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::control::WbSrc;
use crate::core::decode::decode;
use crate::core::units::alu::Alu;
use crate::core::units::imm;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::InstructionBits;
use crate::mem::Ram;

#[cfg(feature = "commit-log")]
use tracing::trace;

/// Bit mask to ensure `JALR` target addresses are 2-byte aligned.
const JALR_ALIGNMENT_MASK: u32 = !1;

/// Observable outputs of one datapath cycle.
///
/// Every field is driven every cycle; gated signals (`mem_byte_mask`,
/// `mem_read_data`, `mem_write_data`) are zero when the corresponding
/// enable is off. The external fetch unit sequences the PC from
/// `branch_taken`, `jump`, and `branch_target`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CycleOutputs {
    /// Result of the ALU operation (also the memory byte address).
    pub alu_result: u32,
    /// Branch comparison outcome; `false` for every non-branch instruction.
    pub branch_taken: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub jump: bool,
    /// Control-transfer target: PC-relative for branches and `JAL`,
    /// register-relative (bit 0 cleared) for `JALR`. Only meaningful when
    /// `branch_taken` or `jump` is set.
    pub branch_target: u32,
    /// Register write enable. The `x0` guard lives in the register file,
    /// so this reflects the decoded enable even when `rd` is `x0`.
    pub reg_write: bool,
    /// Value presented to the register write port.
    pub reg_write_data: u32,
    /// Byte address presented to the load/store path.
    pub mem_addr: u32,
    /// Data word driven to memory (already shifted into its lanes).
    pub mem_write_data: u32,
    /// 4-bit byte mask for the store; zero when no store commits.
    pub mem_byte_mask: u8,
    /// Extended load result; zero when no load is performed.
    pub mem_read_data: u32,
}

/// Single-cycle execution and memory core.
///
/// Owns the core's architectural state: the general-purpose register file
/// and the word-granular data memory. The PC and instruction fetch live
/// outside; [`Datapath::step`] consumes one fetched instruction per call.
#[derive(Debug)]
pub struct Datapath {
    /// General-purpose register file (`x0` hardwired to zero).
    pub gpr: Gpr,
    /// Word-granular data memory.
    pub ram: Ram,
}

impl Datapath {
    /// Creates a datapath with zeroed registers and memory sized from the
    /// configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (memory sizing).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMemorySize`] if the configured word
    /// count is not a nonzero power of two.
    pub fn new(config: &Config) -> Result<Self, CoreError> {
        Ok(Self {
            gpr: Gpr::new(),
            ram: Ram::new(config.memory.ram_words)?,
        })
    }

    /// Executes one instruction and commits its architectural effects.
    ///
    /// Runs the full single-cycle flow: decode, operand selection, ALU
    /// evaluation, memory access, and writeback. Malformed encodings decode
    /// to the inert control word and flow through as a no-op.
    ///
    /// # Arguments
    ///
    /// * `inst` - The fetched 32-bit instruction word.
    /// * `pc`   - The address the instruction was fetched from.
    ///
    /// # Returns
    ///
    /// The observable signals of the cycle.
    pub fn step(&mut self, inst: u32, pc: u32) -> CycleOutputs {
        let ctrl = decode(inst);

        let rs1_val = self.gpr.read(inst.rs1());
        let rs2_val = self.gpr.read(inst.rs2());
        let imm_val = imm::extend(ctrl.imm, inst);

        let op_a = if ctrl.use_pc { pc } else { rs1_val };
        let op_b = if ctrl.use_imm { imm_val } else { rs2_val };

        let (alu_result, branch_taken) = Alu::evaluate(ctrl.alu, op_a, op_b);

        // Jumps take their target from the ALU adder (PC+imm for JAL,
        // rs1+imm for JALR); branches use the dedicated PC-relative adder
        // since the ALU is busy comparing. The adder runs every cycle; the
        // value is consumed only when `branch_taken` or `jump` is set.
        let jump = ctrl.wb_src == WbSrc::PcPlus4;
        let branch_target = if jump {
            if ctrl.use_pc {
                alu_result
            } else {
                alu_result & JALR_ALIGNMENT_MASK
            }
        } else {
            pc.wrapping_add(imm_val)
        };

        let mem_addr = alu_result;
        let mut mem_write_data = 0;
        let mut mem_byte_mask = 0;
        let mut mem_read_data = 0;

        if ctrl.mem_write {
            let (data, mask) = Lsu::build_store(ctrl.width, mem_addr, rs2_val);
            self.ram.write(mem_addr >> 2, data, mask);
            mem_write_data = data;
            mem_byte_mask = mask;

            #[cfg(feature = "commit-log")]
            trace!(
                pc = format_args!("{pc:#010x}"),
                addr = format_args!("{mem_addr:#010x}"),
                data = format_args!("{data:#010x}"),
                mask = format_args!("{mask:#06b}"),
                "mem commit"
            );
        }

        if ctrl.mem_read {
            let word = self.ram.read(mem_addr >> 2);
            mem_read_data = Lsu::extend_load(ctrl.width, mem_addr, word);
        }

        let reg_write_data = match ctrl.wb_src {
            WbSrc::Alu => alu_result,
            WbSrc::PcPlus4 => pc.wrapping_add(4),
            WbSrc::Mem => mem_read_data,
        };

        if ctrl.reg_write {
            self.gpr.write(inst.rd(), reg_write_data);

            #[cfg(feature = "commit-log")]
            trace!(
                pc = format_args!("{pc:#010x}"),
                rd = inst.rd(),
                value = format_args!("{reg_write_data:#010x}"),
                "reg commit"
            );
        }

        CycleOutputs {
            alu_result,
            branch_taken,
            jump,
            branch_target,
            reg_write: ctrl.reg_write,
            reg_write_data,
            mem_addr,
            mem_write_data,
            mem_byte_mask,
            mem_read_data,
        }
    }

    /// Clears registers and restores memory to zero, keeping the size.
    pub fn reset(&mut self) {
        self.gpr.reset();
        self.ram.reset();
    }
}
