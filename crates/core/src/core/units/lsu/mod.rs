//! Load/Store Unit (LSU).
//!
//! This module provides the load/store path between the ALU-computed byte
//! address and the word-granular data memory. It includes:
//! - [`store`]: Store manager producing the shifted data word and byte mask.
//! - [`load`]: Load extender performing lane select and sign/zero extension.
//!
//! The low two bits of the byte address are consumed entirely here; the
//! memory array itself only ever sees word indices and byte masks.

/// Load extension (lane select plus sign/zero extension).
pub mod load;

/// Store alignment and byte-mask generation.
pub mod store;

use crate::core::control::MemWidth;

/// Load/Store Unit (LSU) for memory operations.
///
/// Provides a unified interface over the store manager and load extender.
pub struct Lsu;

impl Lsu {
    /// Builds the data word and byte mask for a store.
    ///
    /// Delegates to [`store::build`]. See that function for full
    /// documentation.
    ///
    /// # Arguments
    ///
    /// * `width` - The access width from the control word
    /// * `addr`  - The byte address (only the low two bits are consulted)
    /// * `value` - The full register value to store
    ///
    /// # Returns
    ///
    /// The `(data, mask)` pair to present to memory.
    #[inline(always)]
    pub fn build_store(width: MemWidth, addr: u32, value: u32) -> (u32, u8) {
        store::build(width, addr, value)
    }

    /// Extends a loaded memory word to the register width.
    ///
    /// Delegates to [`load::extend`]. See that function for full
    /// documentation.
    ///
    /// # Arguments
    ///
    /// * `width` - The access width from the control word
    /// * `addr`  - The byte address (only the low two bits are consulted)
    /// * `word`  - The raw word read from memory
    ///
    /// # Returns
    ///
    /// The extended 32-bit load result.
    #[inline(always)]
    pub fn extend_load(width: MemWidth, addr: u32, word: u32) -> u32 {
        load::extend(width, addr, word)
    }
}
