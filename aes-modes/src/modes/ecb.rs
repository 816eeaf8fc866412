//! ECB (Electronic Code Book) mode implementation

use crate::cipher::BlockCipher;
use crate::utils::PendingBlock;

use super::EncryptTransform;

/// ECB encryption with PKCS#7 padding.
///
/// Every block is encrypted on its own; there is no IV.
pub struct EcbEncryptor<C> {
    cipher: C,
    pending: PendingBlock,
}

impl<C: BlockCipher> EcbEncryptor<C> {
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            pending: PendingBlock::new(),
        }
    }
}

impl<C: BlockCipher> EncryptTransform for EcbEncryptor<C> {
    fn update(&mut self, mut input: &[u8], output: &mut Vec<u8>) {
        while !input.is_empty() {
            let taken = self.pending.fill(input);
            input = &input[taken..];

            if let Some(mut block) = self.pending.take_full() {
                self.cipher.encrypt_block(&mut block);
                output.extend_from_slice(&block);
            }
        }
    }

    fn finalize(self, output: &mut Vec<u8>) {
        let mut block = self.pending.into_padded();
        self.cipher.encrypt_block(&mut block);
        output.extend_from_slice(&block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::encrypt_bytes;
    use crate::modes::test_support::{IdentityCipher, XorCipher};

    #[test]
    fn test_ecb_empty_input_is_one_padding_block() {
        let ciphertext = encrypt_bytes(EcbEncryptor::new(IdentityCipher), b"");
        assert_eq!(ciphertext, vec![16u8; 16]);
    }

    #[test]
    fn test_ecb_partial_block_padding() {
        let ciphertext = encrypt_bytes(EcbEncryptor::new(IdentityCipher), b"Hello, World!");
        assert_eq!(ciphertext.len(), 16);
        assert_eq!(&ciphertext[..13], b"Hello, World!");
        assert_eq!(&ciphertext[13..], &[3, 3, 3]);
    }

    #[test]
    fn test_ecb_equal_blocks_encrypt_equally() {
        let plaintext = [0x41u8; 32];
        let ciphertext = encrypt_bytes(EcbEncryptor::new(XorCipher(0x5a)), &plaintext);
        assert_eq!(ciphertext.len(), 48);
        assert_eq!(ciphertext[..16], ciphertext[16..32]);
        assert_eq!(ciphertext[0], 0x41 ^ 0x5a);
    }
}
