//! Simulation statistics collection and reporting.
//!
//! This module tracks metrics for the simulator. It provides:
//! 1. **Cycle counts:** Total cycles, retired instructions, and host-time rates.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** Taken-branch counts and rates.

use std::time::Instant;

use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Simulation statistics structure tracking all performance metrics.
///
/// Collects statistics about instruction execution, control flow, and
/// execution time for performance analysis.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump (`JAL`/`JALR`) instructions retired.
    pub inst_jump: u64,
    /// Count of ALU (arithmetic, logical, LUI/AUIPC) instructions retired.
    pub inst_alu: u64,
    /// Count of unrecognized encodings executed as no-ops.
    pub inst_illegal: u64,

    /// Number of conditional branches whose comparison held.
    pub branches_taken: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_alu: 0,
            inst_illegal: 0,
            branches_taken: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"control"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

impl SimStats {
    /// Classifies one executed instruction into the mix counters.
    ///
    /// Recognized opcodes count toward `instructions_retired` and their
    /// category; unrecognized encodings count as illegal no-ops.
    ///
    /// # Arguments
    ///
    /// * `inst` - The 32-bit instruction word that was executed.
    pub fn record_instruction(&mut self, inst: u32) {
        match inst.opcode() {
            opcodes::OP_LOAD => self.inst_load += 1,
            opcodes::OP_STORE => self.inst_store += 1,
            opcodes::OP_BRANCH => self.inst_branch += 1,
            opcodes::OP_JAL | opcodes::OP_JALR => self.inst_jump += 1,
            opcodes::OP_IMM | opcodes::OP_REG | opcodes::OP_LUI | opcodes::OP_AUIPC => {
                self.inst_alu += 1;
            }
            _ => {
                self.inst_illegal += 1;
                return;
            }
        }
        self.instructions_retired += 1;
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`,
    /// `"instruction_mix"`, or `"control"`. Pass an empty slice to print
    /// all sections (same as `print()`).
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    ///
    /// # Panics
    ///
    /// This function will not panic. Division by zero is prevented by
    /// clamping `cycles` and `instructions_retired` to at least 1 before
    /// any division.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };

        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc as f64;
            let khz = (self.cycles as f64 / seconds) / 1000.0;
            println!("\n==========================================================");
            println!("RV32 SINGLE-CYCLE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {ipc:.4}");
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let total_inst = instr as f64;
            println!("INSTRUCTION MIX");
            println!(
                "  op.alu                 {} ({:.2}%)",
                self.inst_alu,
                (self.inst_alu as f64 / total_inst) * 100.0
            );
            println!(
                "  op.load                {} ({:.2}%)",
                self.inst_load,
                (self.inst_load as f64 / total_inst) * 100.0
            );
            println!(
                "  op.store               {} ({:.2}%)",
                self.inst_store,
                (self.inst_store as f64 / total_inst) * 100.0
            );
            println!(
                "  op.branch              {} ({:.2}%)",
                self.inst_branch,
                (self.inst_branch as f64 / total_inst) * 100.0
            );
            println!(
                "  op.jump                {} ({:.2}%)",
                self.inst_jump,
                (self.inst_jump as f64 / total_inst) * 100.0
            );
            println!("  op.illegal             {}", self.inst_illegal);
            println!("----------------------------------------------------------");
        }
        if want("control") {
            let taken_rate = if self.inst_branch > 0 {
                100.0 * (self.branches_taken as f64 / self.inst_branch as f64)
            } else {
                0.0
            };
            println!("CONTROL FLOW");
            println!("  branch.retired         {}", self.inst_branch);
            println!("  branch.taken           {}", self.branches_taken);
            println!("  branch.taken_rate      {taken_rate:.2}%");
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
