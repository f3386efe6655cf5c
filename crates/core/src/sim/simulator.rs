//! Instruction-level simulator.
//!
//! The datapath executes one instruction per call and leaves PC sequencing
//! to its caller; this module is that caller. It owns the datapath, a PC
//! register, and the run statistics, and fetches instruction words from the
//! same word-granular memory the load/store path uses.

use tracing::debug;

use crate::common::error::CoreError;
use crate::config::Config;
use crate::core::datapath::{CycleOutputs, Datapath};
use crate::sim::loader;
use crate::stats::SimStats;

/// Why a [`Simulator::run`] call stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// A jump or taken branch targeted its own address. Bare-metal test
    /// programs conventionally end in such a tight loop.
    TightLoop(u32),

    /// The caller's cycle budget was exhausted.
    CycleLimit,
}

/// Top-level simulator: datapath state plus PC sequencing.
#[derive(Debug)]
pub struct Simulator {
    /// The single-cycle core (register file and data memory).
    pub datapath: Datapath,
    /// Current program counter.
    pub pc: u32,
    /// Run statistics.
    pub stats: SimStats,
    trace_instructions: bool,
}

impl Simulator {
    /// Creates a new simulator with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (memory size, start PC).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMemorySize`] if the configured memory
    /// size is not a nonzero power of two.
    pub fn new(config: &Config) -> Result<Self, CoreError> {
        Ok(Self {
            datapath: Datapath::new(config)?,
            pc: config.general.start_pc,
            stats: SimStats::default(),
            trace_instructions: config.general.trace_instructions,
        })
    }

    /// Loads a program image from disk and points the PC at its entry.
    ///
    /// ELF executables land at their link addresses; flat binaries land at
    /// the current PC (the configured start address).
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image file.
    ///
    /// # Errors
    ///
    /// Returns the loader's [`CoreError`] if the image cannot be read,
    /// parsed, or placed.
    pub fn load_program(&mut self, path: &str) -> Result<(), CoreError> {
        let data = loader::read_image(path)?;
        self.pc = loader::load_program(&mut self.datapath.ram, &data, self.pc)?;
        Ok(())
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// Fetches the instruction word at the PC, steps the datapath, updates
    /// statistics, and sequences the PC: the reported target when the cycle
    /// branched or jumped, PC + 4 otherwise.
    ///
    /// # Returns
    ///
    /// The datapath outputs of the executed cycle.
    pub fn tick(&mut self) -> CycleOutputs {
        let pc = self.pc;
        let inst = self.datapath.ram.read(pc >> 2);
        let out = self.datapath.step(inst, pc);

        self.stats.cycles += 1;
        self.stats.record_instruction(inst);
        if out.branch_taken {
            self.stats.branches_taken += 1;
        }

        if self.trace_instructions {
            debug!(
                pc = format_args!("{pc:#010x}"),
                inst = format_args!("{inst:#010x}"),
                "execute"
            );
        }

        self.pc = if out.branch_taken || out.jump {
            out.branch_target
        } else {
            pc.wrapping_add(4)
        };
        out
    }

    /// Runs until the program halts or the cycle budget runs out.
    ///
    /// # Arguments
    ///
    /// * `cycle_limit` - Maximum number of cycles, or `None` to run until
    ///   a tight loop is reached.
    ///
    /// # Returns
    ///
    /// The reason the run stopped.
    pub fn run(&mut self, cycle_limit: Option<u64>) -> HaltReason {
        loop {
            let pc = self.pc;
            let out = self.tick();

            if (out.branch_taken || out.jump) && out.branch_target == pc {
                debug!(pc = format_args!("{pc:#010x}"), "tight loop, halting");
                return HaltReason::TightLoop(pc);
            }
            if let Some(limit) = cycle_limit {
                if self.stats.cycles >= limit {
                    return HaltReason::CycleLimit;
                }
            }
        }
    }

    /// Resets architectural state and the PC, keeping the loaded memory size.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration supplying the restart PC.
    pub fn reset(&mut self, config: &Config) {
        self.datapath.reset();
        self.pc = config.general.start_pc;
        self.stats = SimStats::default();
    }
}
