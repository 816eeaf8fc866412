//! Utility functions for the mode transforms

use crate::cipher::{Block, BLOCK_SIZE};

/// XOR `other` into `block`.
#[inline]
pub fn xor_in_place(block: &mut Block, other: &Block) {
    for (b, o) in block.iter_mut().zip(other.iter()) {
        *b ^= o;
    }
}

/// Pad the first `len` bytes of `block` with PKCS#7.
///
/// `len` must be below the block size; a full block of padding is written
/// when `len == 0`.
pub fn pkcs7_pad(block: &mut Block, len: usize) {
    debug_assert!(len < BLOCK_SIZE);
    let pad = (BLOCK_SIZE - len) as u8;
    block[len..].fill(pad);
}

/// Accumulates input until a whole block is available.
#[derive(Debug, Clone, Default)]
pub struct PendingBlock {
    buf: Block,
    len: usize,
}

impl PendingBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy as much of `input` as fits. Returns the number of bytes taken.
    pub fn fill(&mut self, input: &[u8]) -> usize {
        let take = (BLOCK_SIZE - self.len).min(input.len());
        self.buf[self.len..self.len + take].copy_from_slice(&input[..take]);
        self.len += take;
        take
    }

    /// Hands out the block once it is full and resets the buffer.
    pub fn take_full(&mut self) -> Option<Block> {
        if self.len == BLOCK_SIZE {
            self.len = 0;
            Some(self.buf)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The buffered tail with PKCS#7 padding applied.
    pub fn into_padded(mut self) -> Block {
        pkcs7_pad(&mut self.buf, self.len);
        self.buf
    }
}
