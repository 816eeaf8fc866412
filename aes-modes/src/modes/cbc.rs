//! CBC (Cipher Block Chaining) mode implementation

use crate::cipher::{Block, BlockCipher};
use crate::config::Iv;
use crate::utils::{xor_in_place, PendingBlock};

use super::EncryptTransform;

/// CBC encryption with PKCS#7 padding.
///
/// Algorithm:
/// 1. C_0 = IV
/// 2. C_i = E(K, P_i ⊕ C_{i-1})
pub struct CbcEncryptor<C> {
    cipher: C,
    previous: Block,
    pending: PendingBlock,
}

impl<C: BlockCipher> CbcEncryptor<C> {
    pub fn new(cipher: C, iv: &Iv) -> Self {
        Self {
            cipher,
            previous: *iv.as_bytes(),
            pending: PendingBlock::new(),
        }
    }

    fn chain(&mut self, mut block: Block, output: &mut Vec<u8>) {
        xor_in_place(&mut block, &self.previous);
        self.cipher.encrypt_block(&mut block);
        output.extend_from_slice(&block);
        self.previous = block;
    }
}

impl<C: BlockCipher> EncryptTransform for CbcEncryptor<C> {
    fn update(&mut self, mut input: &[u8], output: &mut Vec<u8>) {
        while !input.is_empty() {
            let taken = self.pending.fill(input);
            input = &input[taken..];

            if let Some(block) = self.pending.take_full() {
                self.chain(block, output);
            }
        }
    }

    fn finalize(mut self, output: &mut Vec<u8>) {
        let block = std::mem::take(&mut self.pending).into_padded();
        self.chain(block, output);
    }
}
