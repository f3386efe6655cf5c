//! Program Loader Tests.
//!
//! Covers image reading from disk, format dispatch between ELF and flat
//! binaries, and the rejection paths: unreadable files, malformed ELF
//! images, foreign architectures, and images that do not fit in memory.
//!
//! ELF acceptance is tested against a hand-assembled minimal ELF32
//! header, so no fixture binaries are needed.

use std::io::Write;

use tempfile::NamedTempFile;

use rv32sc_core::common::CoreError;
use rv32sc_core::config::Config;
use rv32sc_core::mem::Ram;
use rv32sc_core::sim::loader;
use rv32sc_core::Simulator;

// ─── Helpers ─────────────────────────────────────────────────────────────────

const EM_RISCV: u16 = 243;
const EM_386: u16 = 3;

fn create_temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(data).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// A valid 52-byte ELF32 header with no segments and no sections:
/// little-endian, ET_EXEC, with the given machine and entry point.
fn minimal_elf32(machine: u16, entry: u32) -> Vec<u8> {
    let mut image = Vec::with_capacity(52);
    image.extend_from_slice(&[0x7F, b'E', b'L', b'F', 1, 1, 1, 0]);
    image.extend_from_slice(&[0u8; 8]); // ident padding
    image.extend_from_slice(&2u16.to_le_bytes()); // e_type = ET_EXEC
    image.extend_from_slice(&machine.to_le_bytes()); // e_machine
    image.extend_from_slice(&1u32.to_le_bytes()); // e_version
    image.extend_from_slice(&entry.to_le_bytes()); // e_entry
    image.extend_from_slice(&0u32.to_le_bytes()); // e_phoff
    image.extend_from_slice(&0u32.to_le_bytes()); // e_shoff
    image.extend_from_slice(&0u32.to_le_bytes()); // e_flags
    image.extend_from_slice(&52u16.to_le_bytes()); // e_ehsize
    image.extend_from_slice(&32u16.to_le_bytes()); // e_phentsize
    image.extend_from_slice(&0u16.to_le_bytes()); // e_phnum
    image.extend_from_slice(&40u16.to_le_bytes()); // e_shentsize
    image.extend_from_slice(&0u16.to_le_bytes()); // e_shnum
    image.extend_from_slice(&0u16.to_le_bytes()); // e_shstrndx
    image
}

fn ram(words: usize) -> Ram {
    Ram::new(words).expect("valid word count")
}

// ═════════════════════════════════════════════════════════════════════════════
//  Reading images from disk
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_load_read_image_returns_file_bytes() {
    let data = [0x13u8, 0x05, 0x30, 0x00, 0xEF, 0xBE];
    let file = create_temp_binary(&data);

    let bytes = loader::read_image(file.path().to_str().unwrap()).unwrap();

    assert_eq!(bytes, data);
}

#[test]
fn test_load_read_image_missing_file_is_io_error() {
    let result = loader::read_image("/nonexistent/program.bin");
    assert!(matches!(result, Err(CoreError::Io { .. })));
}

#[test]
fn test_load_read_image_empty_file() {
    let file = create_temp_binary(&[]);
    let bytes = loader::read_image(file.path().to_str().unwrap()).unwrap();
    assert!(bytes.is_empty());
}

// ═════════════════════════════════════════════════════════════════════════════
//  Flat binaries
// ═════════════════════════════════════════════════════════════════════════════

/// A flat image lands at the caller's base address, which doubles as
/// the entry point.
#[test]
fn test_load_flat_image_at_base() {
    let mut r = ram(64);

    let entry = loader::load_program(&mut r, &[0xEF, 0xBE, 0xAD, 0xDE], 0).unwrap();

    assert_eq!(entry, 0);
    assert_eq!(r.read(0), 0xDEAD_BEEF);
}

#[test]
fn test_load_flat_image_at_offset_base() {
    let mut r = ram(64);

    let entry = loader::load_program(&mut r, &[0x44, 0x33, 0x22, 0x11], 0x80).unwrap();

    assert_eq!(entry, 0x80);
    assert_eq!(r.read(0x80 >> 2), 0x1122_3344);
    assert_eq!(r.read(0), 0);
}

#[test]
fn test_load_flat_empty_image() {
    let mut r = ram(64);
    let entry = loader::load_program(&mut r, &[], 0x40).unwrap();
    assert_eq!(entry, 0x40);
}

/// The first three magic bytes alone do not make an ELF; the image
/// falls through to the flat loader.
#[test]
fn test_load_partial_magic_is_flat() {
    let mut r = ram(64);

    let entry = loader::load_program(&mut r, &[0x7F, b'E', b'L', 0x00], 0).unwrap();

    assert_eq!(entry, 0);
    assert_eq!(r.read(0), 0x004C_457F);
}

#[test]
fn test_load_flat_image_too_large() {
    // 16 words = 64 bytes of capacity
    let mut r = ram(16);
    let image = vec![0u8; 65];

    let result = loader::load_program(&mut r, &image, 0);

    assert!(matches!(
        result,
        Err(CoreError::ImageTooLarge {
            addr: 0,
            len: 65,
            capacity: 64
        })
    ));
}

#[test]
fn test_load_flat_overhang_rejected() {
    let mut r = ram(16);

    // 8 bytes starting at 60 would end at 68, past the 64-byte capacity
    let result = loader::load_program(&mut r, &[0u8; 8], 60);

    assert!(matches!(result, Err(CoreError::ImageTooLarge { .. })));
}

// ═════════════════════════════════════════════════════════════════════════════
//  ELF images
// ═════════════════════════════════════════════════════════════════════════════

/// A valid RISC-V ELF reports its own entry point, not the flat base.
#[test]
fn test_load_riscv_elf_returns_entry() {
    let mut r = ram(64);
    let image = minimal_elf32(EM_RISCV, 0x100);

    let entry = loader::load_program(&mut r, &image, 0).unwrap();

    assert_eq!(entry, 0x100);
}

#[test]
fn test_load_wrong_architecture_rejected() {
    let mut r = ram(64);
    let image = minimal_elf32(EM_386, 0x100);

    let result = loader::load_program(&mut r, &image, 0);

    assert!(matches!(result, Err(CoreError::WrongArchitecture)));
}

/// Magic bytes followed by garbage must fail parsing, not load as flat.
#[test]
fn test_load_truncated_elf_is_bad_image() {
    let mut r = ram(64);

    let result = loader::load_program(&mut r, &[0x7F, b'E', b'L', b'F', 0xFF, 0xFF], 0);

    assert!(matches!(result, Err(CoreError::BadImage(_))));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Simulator wiring
// ═════════════════════════════════════════════════════════════════════════════

/// `Simulator::load_program` reads the file, places a flat image at the
/// configured start PC, and leaves the PC pointing at it.
#[test]
fn test_load_program_via_simulator() {
    let file = create_temp_binary(&[0x93, 0x00, 0x30, 0x00]); // addi x1, x0, 3
    let mut sim = Simulator::new(&Config::default()).unwrap();

    sim.load_program(file.path().to_str().unwrap()).unwrap();

    assert_eq!(sim.pc, 0);
    assert_eq!(sim.datapath.ram.read(0), 0x0030_0093);
}

#[test]
fn test_load_program_via_simulator_missing_file() {
    let mut sim = Simulator::new(&Config::default()).unwrap();
    let result = sim.load_program("/nonexistent/program.bin");
    assert!(matches!(result, Err(CoreError::Io { .. })));
}
