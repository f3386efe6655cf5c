//! Program Loader.
//!
//! This module places program images into data memory before a run. It
//! performs:
//! 1. **ELF loading:** Parses RV32 ELF executables and copies every loadable
//!    segment to its link address, returning the entry point.
//! 2. **Flat loading:** Places raw binaries at a caller-supplied address.
//! 3. **Format sniffing:** Picks the loader from the image's magic bytes.

use object::read::elf::ElfFile32;
use object::{Endianness, Object, ObjectSegment};
use tracing::debug;

use crate::common::error::CoreError;
use crate::mem::Ram;

/// ELF magic bytes used to sniff the image format.
const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// Reads a program image from disk.
///
/// # Arguments
///
/// * `path` - Path to the image file.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be read.
pub fn read_image(path: &str) -> Result<Vec<u8>, CoreError> {
    std::fs::read(path).map_err(|source| CoreError::Io {
        path: path.to_string(),
        source,
    })
}

/// Loads a program image, dispatching on its format.
///
/// ELF executables are placed at their link addresses and the ELF entry
/// point is returned. Anything else is treated as a flat binary, placed at
/// `flat_base`, which is also the returned entry point.
///
/// # Arguments
///
/// * `ram`       - Data memory to load into.
/// * `data`      - The image bytes.
/// * `flat_base` - Load address used when the image is a flat binary.
///
/// # Errors
///
/// Returns [`CoreError::BadImage`], [`CoreError::WrongArchitecture`], or
/// [`CoreError::ImageTooLarge`] for malformed or oversized ELF images.
pub fn load_program(ram: &mut Ram, data: &[u8], flat_base: u32) -> Result<u32, CoreError> {
    if data.starts_with(&ELF_MAGIC) {
        load_elf(ram, data)
    } else {
        load_flat(ram, data, flat_base)?;
        Ok(flat_base)
    }
}

/// Loads an RV32 ELF executable into memory.
///
/// Every loadable segment is copied to its physical address; segments with
/// a memory size larger than their file size rely on memory being
/// zero-initialized for the BSS tail.
///
/// # Arguments
///
/// * `ram`  - Data memory to load into.
/// * `data` - The ELF image bytes.
///
/// # Returns
///
/// The ELF entry point.
///
/// # Errors
///
/// Returns [`CoreError::BadImage`] if the image does not parse,
/// [`CoreError::WrongArchitecture`] if it is not RISC-V 32-bit, and
/// [`CoreError::ImageTooLarge`] if a segment does not fit in memory.
pub fn load_elf(ram: &mut Ram, data: &[u8]) -> Result<u32, CoreError> {
    let elf = ElfFile32::<Endianness>::parse(data)
        .map_err(|e| CoreError::BadImage(e.to_string()))?;

    if elf.architecture() != object::Architecture::Riscv32 {
        return Err(CoreError::WrongArchitecture);
    }

    for segment in elf.segments() {
        let addr = segment.address() as u32;
        let bytes = segment
            .data()
            .map_err(|e| CoreError::BadImage(e.to_string()))?;
        if bytes.is_empty() {
            continue;
        }
        check_fit(ram, addr, bytes.len())?;
        ram.load_bytes(addr, bytes);
        debug!(
            addr = format_args!("{addr:#010x}"),
            len = bytes.len(),
            "loaded segment"
        );
    }

    Ok(elf.entry() as u32)
}

/// Loads a flat binary image at a fixed address.
///
/// # Arguments
///
/// * `ram`  - Data memory to load into.
/// * `data` - The raw bytes.
/// * `base` - Byte address where the image begins.
///
/// # Errors
///
/// Returns [`CoreError::ImageTooLarge`] if the image does not fit.
pub fn load_flat(ram: &mut Ram, data: &[u8], base: u32) -> Result<(), CoreError> {
    check_fit(ram, base, data.len())?;
    ram.load_bytes(base, data);
    debug!(
        addr = format_args!("{base:#010x}"),
        len = data.len(),
        "loaded flat image"
    );
    Ok(())
}

/// Checks that `len` bytes starting at `addr` stay inside memory.
fn check_fit(ram: &Ram, addr: u32, len: usize) -> Result<(), CoreError> {
    let capacity = ram.len() * 4;
    if addr as usize + len > capacity {
        return Err(CoreError::ImageTooLarge {
            addr,
            len,
            capacity,
        });
    }
    Ok(())
}
