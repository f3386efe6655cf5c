//! Statistics Verification Tests.
//!
//! Checks the instruction classification that feeds the mix counters
//! and the bookkeeping invariant behind them: every recognized
//! instruction retires into exactly one category, illegal encodings
//! are counted but never retired.

use rv32sc_core::stats::{SimStats, STATS_SECTIONS};

use crate::common::builder::instruction::InstructionBuilder;

// ═════════════════════════════════════════════════════════════════════════════
//  Defaults
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.inst_load, 0);
    assert_eq!(stats.inst_store, 0);
    assert_eq!(stats.inst_branch, 0);
    assert_eq!(stats.inst_jump, 0);
    assert_eq!(stats.inst_alu, 0);
    assert_eq!(stats.inst_illegal, 0);
    assert_eq!(stats.branches_taken, 0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Classification
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn loads_count_as_loads() {
    let mut stats = SimStats::default();
    stats.record_instruction(InstructionBuilder::new().lw(1, 2, 0).build());
    stats.record_instruction(InstructionBuilder::new().lbu(1, 2, 0).build());

    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.instructions_retired, 2);
}

#[test]
fn stores_count_as_stores() {
    let mut stats = SimStats::default();
    stats.record_instruction(InstructionBuilder::new().sw(1, 2, 0).build());

    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.instructions_retired, 1);
}

#[test]
fn branches_count_as_branches() {
    let mut stats = SimStats::default();
    stats.record_instruction(InstructionBuilder::new().beq(1, 2, 8).build());
    stats.record_instruction(InstructionBuilder::new().bgeu(1, 2, 8).build());

    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.instructions_retired, 2);
}

/// JAL and JALR share the jump counter.
#[test]
fn jal_and_jalr_count_as_jumps() {
    let mut stats = SimStats::default();
    stats.record_instruction(InstructionBuilder::new().jal(1, 16).build());
    stats.record_instruction(InstructionBuilder::new().jalr(0, 1, 0).build());

    assert_eq!(stats.inst_jump, 2);
    assert_eq!(stats.instructions_retired, 2);
}

/// Register ops, immediate ops, and the upper-immediate pair all land
/// in the ALU bucket.
#[test]
fn computational_ops_count_as_alu() {
    let mut stats = SimStats::default();
    stats.record_instruction(InstructionBuilder::new().add(1, 2, 3).build());
    stats.record_instruction(InstructionBuilder::new().addi(1, 2, 5).build());
    stats.record_instruction(InstructionBuilder::new().lui(1, 0x1).build());
    stats.record_instruction(InstructionBuilder::new().auipc(1, 0x1).build());

    assert_eq!(stats.inst_alu, 4);
    assert_eq!(stats.instructions_retired, 4);
}

/// Unrecognized encodings are tallied separately and never retire.
#[test]
fn illegal_encodings_not_retired() {
    let mut stats = SimStats::default();
    stats.record_instruction(0x0000_0000);
    stats.record_instruction(0xFFFF_FFFF);

    assert_eq!(stats.inst_illegal, 2);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.inst_alu, 0);
}

/// The category counters partition the retired count.
#[test]
fn categories_sum_to_retired() {
    let mut stats = SimStats::default();
    let program = [
        InstructionBuilder::new().addi(1, 0, 5).build(),
        InstructionBuilder::new().lw(2, 1, 0).build(),
        InstructionBuilder::new().sw(1, 2, 4).build(),
        InstructionBuilder::new().beq(1, 2, 8).build(),
        InstructionBuilder::new().jal(0, 16).build(),
        0xDEAD_BEEF, // illegal, must not retire
    ];
    for inst in program {
        stats.record_instruction(inst);
    }

    let categorized =
        stats.inst_alu + stats.inst_load + stats.inst_store + stats.inst_branch + stats.inst_jump;
    assert_eq!(categorized, stats.instructions_retired);
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.inst_illegal, 1);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Reporting
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn clone_preserves_counters() {
    let mut stats = SimStats::default();
    stats.cycles = 100;
    stats.record_instruction(InstructionBuilder::new().add(1, 2, 3).build());

    let copy = stats.clone();

    assert_eq!(copy.cycles, 100);
    assert_eq!(copy.inst_alu, 1);
}

#[test]
fn print_does_not_panic_on_empty_stats() {
    SimStats::default().print();
}

#[test]
fn print_sections_accepts_each_known_section() {
    let mut stats = SimStats::default();
    stats.cycles = 10;
    stats.record_instruction(InstructionBuilder::new().beq(0, 0, 0).build());
    stats.branches_taken = 1;

    for section in STATS_SECTIONS {
        stats.print_sections(&[section.to_string()]);
    }
}
