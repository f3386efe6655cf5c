//! Word-granular byte-maskable RAM.
//!
//! This module implements the data memory array. It performs the following:
//! 1. **Storage:** Maintains a power-of-two array of 32-bit words.
//! 2. **Masked Writes:** Merges store data into a word under a 4-bit byte mask.
//! 3. **Address Truncation:** Ignores index bits above the array size, the
//!    way a hardware address decoder leaves high bits unconnected.

use crate::common::error::CoreError;

/// Per-lane byte masks, indexed by byte lane within the word.
const LANE_MASKS: [u32; 4] = [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000];

/// Word-granular data memory with byte-masked writes.
///
/// The array length is a power of two; word indices are masked by
/// `len - 1`, so every index is in range and out-of-range addresses wrap.
/// Reads and writes never fail.
#[derive(Debug)]
pub struct Ram {
    words: Vec<u32>,
    index_mask: usize,
}

impl Ram {
    /// Creates a zero-filled RAM of `words` 32-bit words.
    ///
    /// # Arguments
    ///
    /// * `words` - Capacity in words. Must be a nonzero power of two so
    ///   that index masking is equivalent to modulo addressing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMemorySize`] if `words` is zero or not
    /// a power of two.
    pub fn new(words: usize) -> Result<Self, CoreError> {
        if words == 0 || !words.is_power_of_two() {
            return Err(CoreError::InvalidMemorySize(words));
        }
        Ok(Self {
            words: vec![0; words],
            index_mask: words - 1,
        })
    }

    /// Returns the capacity in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the RAM holds no words. Construction rejects a
    /// zero size, so this is always `false` for a constructed RAM.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at a word index.
    ///
    /// # Arguments
    ///
    /// * `word_index` - Index into the word array. Bits above the array
    ///   size are ignored.
    pub fn read(&self, word_index: u32) -> u32 {
        self.words[word_index as usize & self.index_mask]
    }

    /// Writes `data` into the word at a word index under a byte mask.
    ///
    /// Each set bit of `mask` replaces the corresponding byte lane of the
    /// stored word; clear bits preserve the existing bytes.
    ///
    /// # Arguments
    ///
    /// * `word_index` - Index into the word array. Bits above the array
    ///   size are ignored.
    /// * `data`       - Full data word, already shifted into its lanes.
    /// * `mask`       - 4-bit byte mask (bit 0 = least significant byte).
    pub fn write(&mut self, word_index: u32, data: u32, mask: u8) {
        let idx = word_index as usize & self.index_mask;
        let bits = expand_mask(mask);
        self.words[idx] = (self.words[idx] & !bits) | (data & bits);
    }

    /// Copies a byte slice into memory starting at a byte address.
    ///
    /// Bytes are merged lane by lane through the masked write path, so a
    /// misaligned base address is handled naturally.
    ///
    /// # Arguments
    ///
    /// * `base` - Starting byte address.
    /// * `data` - The bytes to place.
    pub fn load_bytes(&mut self, base: u32, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            let addr = base.wrapping_add(i as u32);
            let lane = addr & 0b11;
            self.write(addr >> 2, u32::from(byte) << (8 * lane), 1 << lane);
        }
    }

    /// Copies full words into memory starting at a byte address.
    ///
    /// The low two bits of `base` are ignored; words land on word
    /// boundaries.
    ///
    /// # Arguments
    ///
    /// * `base`  - Starting byte address (truncated to a word boundary).
    /// * `words` - The words to place.
    pub fn load_words(&mut self, base: u32, words: &[u32]) {
        for (i, &word) in words.iter().enumerate() {
            self.write((base >> 2).wrapping_add(i as u32), word, 0b1111);
        }
    }

    /// Zero-fills the array, keeping the capacity.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }
}

/// Expands a 4-bit byte mask into the 32-bit lane mask it covers.
fn expand_mask(mask: u8) -> u32 {
    let mut bits = 0;
    for (lane, lane_mask) in LANE_MASKS.iter().enumerate() {
        if mask & (1 << lane) != 0 {
            bits |= lane_mask;
        }
    }
    bits
}
