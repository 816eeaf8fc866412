//! Block cipher seam and the AES-128 implementation behind it

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes128;

use crate::error::{ModeError, Result};

/// Block size of the cipher in bytes.
pub const BLOCK_SIZE: usize = 16;

/// One cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// Trait for a keyed block cipher operating on single blocks in place
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts a single block
    fn decrypt_block(&self, block: &mut Block);
}

/// AES-128 keyed with one 16-byte key.
pub struct Aes128Cipher {
    inner: Aes128,
}

impl Aes128Cipher {
    /// Key the cipher. Anything other than a 16-byte key is rejected by the
    /// engine and reported as [`ModeError::Transform`].
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = Aes128::new_from_slice(key).map_err(|_| {
            ModeError::Transform(format!("AES-128 engine rejected a {}-byte key", key.len()))
        })?;
        Ok(Self { inner })
    }
}

impl BlockCipher for Aes128Cipher {
    fn encrypt_block(&self, block: &mut Block) {
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&self, block: &mut Block) {
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_hex_array;

    // FIPS-197 appendix C.1
    #[test]
    fn test_aes128_known_answer() {
        let key = decode_hex_array::<16>("000102030405060708090a0b0c0d0e0f").unwrap();
        let cipher = Aes128Cipher::new(&key).unwrap();

        let mut block = decode_hex_array::<16>("00112233445566778899aabbccddeeff").unwrap();
        cipher.encrypt_block(&mut block);
        assert_eq!(
            block,
            decode_hex_array::<16>("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap()
        );

        cipher.decrypt_block(&mut block);
        assert_eq!(
            block,
            decode_hex_array::<16>("00112233445566778899aabbccddeeff").unwrap()
        );
    }

    #[test]
    fn test_aes128_rejects_wrong_key_length() {
        assert!(matches!(
            Aes128Cipher::new(&[0u8; 15]),
            Err(ModeError::Transform(_))
        ));
        assert!(matches!(
            Aes128Cipher::new(&[0u8; 32]),
            Err(ModeError::Transform(_))
        ));
    }
}
