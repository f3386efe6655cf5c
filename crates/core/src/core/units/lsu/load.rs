//! Load extension.
//!
//! A load reads the full word containing the addressed byte; this module
//! selects the addressed lane and extends it to the 32-bit register width.
//! Signed widths sign-extend from the lane's top bit, unsigned widths
//! zero-extend, per RISC-V spec §2.6.

use crate::core::control::MemWidth;

/// Extends a loaded memory word to the register width.
///
/// Word loads return the raw word. Half loads select the half-word lane by
/// address bit 1; byte loads select the byte lane by the low two address
/// bits. The selected lane is then sign- or zero-extended according to the
/// width variant.
///
/// # Arguments
///
/// * `width` - The access width from the control word.
/// * `addr`  - The byte address (only the low two bits are consulted).
/// * `word`  - The raw word read from memory.
///
/// # Returns
///
/// The extended 32-bit load result.
pub fn extend(width: MemWidth, addr: u32, word: u32) -> u32 {
    match width {
        MemWidth::Word => word,
        MemWidth::Half => {
            let lane = (addr >> 1) & 1;
            (word >> (16 * lane)) as u16 as i16 as i32 as u32
        }
        MemWidth::HalfU => {
            let lane = (addr >> 1) & 1;
            (word >> (16 * lane)) & 0xFFFF
        }
        MemWidth::Byte => {
            let lane = addr & 0b11;
            (word >> (8 * lane)) as u8 as i8 as i32 as u32
        }
        MemWidth::ByteU => {
            let lane = addr & 0b11;
            (word >> (8 * lane)) & 0xFF
        }
    }
}
