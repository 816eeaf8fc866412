//! CFB (Cipher Feedback) mode implementation
//!
//! Full-block (128-bit) feedback. The cipher output is used as a keystream,
//! so the ciphertext has exactly the plaintext length and no padding.

use crate::cipher::{Block, BlockCipher, BLOCK_SIZE};
use crate::config::Iv;

use super::EncryptTransform;

/// CFB-128 encryption.
///
/// Algorithm:
/// 1. C_0 = IV
/// 2. C_i = P_i ⊕ E(K, C_{i-1}), the last block truncated to the input
pub struct CfbEncryptor<C> {
    cipher: C,
    /// Becomes the previous ciphertext block as bytes are produced.
    register: Block,
    keystream: Block,
    /// Next keystream byte to use; `BLOCK_SIZE` means a fresh block is due.
    position: usize,
}

impl<C: BlockCipher> CfbEncryptor<C> {
    pub fn new(cipher: C, iv: &Iv) -> Self {
        Self {
            cipher,
            register: *iv.as_bytes(),
            keystream: [0u8; BLOCK_SIZE],
            position: BLOCK_SIZE,
        }
    }
}

impl<C: BlockCipher> EncryptTransform for CfbEncryptor<C> {
    fn update(&mut self, input: &[u8], output: &mut Vec<u8>) {
        output.reserve(input.len());
        for &byte in input {
            if self.position == BLOCK_SIZE {
                self.keystream = self.register;
                self.cipher.encrypt_block(&mut self.keystream);
                self.position = 0;
            }

            let encrypted = byte ^ self.keystream[self.position];
            self.register[self.position] = encrypted;
            self.position += 1;
            output.push(encrypted);
        }
    }

    fn finalize(self, _output: &mut Vec<u8>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::encrypt_bytes;
    use crate::modes::test_support::{IdentityCipher, XorCipher};

    #[test]
    fn test_cfb_no_padding() {
        let iv = Iv::from_bytes(&[7u8; 16]).unwrap();
        assert!(encrypt_bytes(CfbEncryptor::new(IdentityCipher, &iv), b"").is_empty());
        assert_eq!(encrypt_bytes(CfbEncryptor::new(IdentityCipher, &iv), b"Hi").len(), 2);
        assert_eq!(
            encrypt_bytes(CfbEncryptor::new(IdentityCipher, &iv), &[0u8; 33]).len(),
            33
        );
    }

    #[test]
    fn test_cfb_feeds_back_ciphertext() {
        let iv = Iv::from_bytes(&[0x0f; 16]).unwrap();
        let plaintext = [0xf0u8; 32];

        // Identity cipher: keystream_1 = IV, keystream_2 = C_1.
        let ciphertext = encrypt_bytes(CfbEncryptor::new(IdentityCipher, &iv), &plaintext);
        assert!(ciphertext[..16].iter().all(|&b| b == 0xff));
        assert!(ciphertext[16..].iter().all(|&b| b == 0x0f));
    }

    #[test]
    fn test_cfb_uses_cipher_output_as_keystream() {
        let iv = Iv::from_bytes(&[0u8; 16]).unwrap();
        let ciphertext = encrypt_bytes(CfbEncryptor::new(XorCipher(0xaa), &iv), &[0u8; 4]);
        assert_eq!(ciphertext, vec![0xaa; 4]);
    }
}
