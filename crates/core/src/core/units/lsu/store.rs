//! Store alignment and byte-mask generation.
//!
//! A store presents memory with a full data word plus a 4-bit byte mask.
//! Sub-word stores shift the low bits of the register value into the byte
//! lane selected by the low address bits and set only that lane's mask
//! bits, so the memory write merges into the existing word.

use crate::core::control::MemWidth;

/// Byte mask covering the full word.
const MASK_WORD: u8 = 0b1111;

/// Byte mask covering one half-word lane (before shifting).
const MASK_HALF: u8 = 0b0011;

/// Byte mask covering one byte lane (before shifting).
const MASK_BYTE: u8 = 0b0001;

/// Builds the data word and byte mask for a store.
///
/// Word stores pass the value through with all four mask bits set. Half
/// stores place the low 16 bits of the value in the half-word lane chosen
/// by address bit 1; byte stores place the low 8 bits in the byte lane
/// chosen by the low two address bits. Unsigned widths behave identically
/// to their signed counterparts (extension only matters on the load path).
///
/// # Arguments
///
/// * `width` - The access width from the control word.
/// * `addr`  - The byte address (only the low two bits are consulted).
/// * `value` - The full register value to store.
///
/// # Returns
///
/// The `(data, mask)` pair to present to memory.
pub fn build(width: MemWidth, addr: u32, value: u32) -> (u32, u8) {
    match width {
        MemWidth::Word => (value, MASK_WORD),
        MemWidth::Half | MemWidth::HalfU => {
            let lane = (addr >> 1) & 1;
            ((value & 0xFFFF) << (16 * lane), MASK_HALF << (2 * lane))
        }
        MemWidth::Byte | MemWidth::ByteU => {
            let lane = addr & 0b11;
            ((value & 0xFF) << (8 * lane), MASK_BYTE << lane)
        }
    }
}
