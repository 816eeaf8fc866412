//! Chaining mode transforms
//!
//! Each transform is fed plaintext incrementally through
//! [`EncryptTransform::update`] and closed with
//! [`EncryptTransform::finalize`]. The transform does its own block
//! segmentation, so how the input is split across `update` calls never
//! changes the ciphertext.

pub mod cbc;
pub mod cfb;
pub mod ecb;

pub use cbc::CbcEncryptor;
pub use cfb::CfbEncryptor;
pub use ecb::EcbEncryptor;

use crate::cipher::BlockCipher;
use crate::config::{Chaining, ChainingMode};

/// Incremental encrypting transform.
pub trait EncryptTransform {
    /// Consume `input` and append every ciphertext byte that can be produced
    /// so far to `output`.
    fn update(&mut self, input: &[u8], output: &mut Vec<u8>);

    /// Append whatever the mode emits at end of input (padding or nothing).
    /// Consumes the transform: no input can follow.
    fn finalize(self, output: &mut Vec<u8>);
}

/// Transform selected by a resolved [`Chaining`].
pub enum Encryptor<C: BlockCipher> {
    Ecb(EcbEncryptor<C>),
    Cbc(CbcEncryptor<C>),
    Cfb(CfbEncryptor<C>),
}

impl<C: BlockCipher> Encryptor<C> {
    pub fn new(cipher: C, chaining: &Chaining) -> Self {
        match chaining {
            Chaining::Ecb => Encryptor::Ecb(EcbEncryptor::new(cipher)),
            Chaining::Cbc(iv) => Encryptor::Cbc(CbcEncryptor::new(cipher, iv)),
            Chaining::Cfb(iv) => Encryptor::Cfb(CfbEncryptor::new(cipher, iv)),
        }
    }

    pub fn mode(&self) -> ChainingMode {
        match self {
            Encryptor::Ecb(_) => ChainingMode::Ecb,
            Encryptor::Cbc(_) => ChainingMode::Cbc,
            Encryptor::Cfb(_) => ChainingMode::Cfb,
        }
    }
}

impl<C: BlockCipher> EncryptTransform for Encryptor<C> {
    fn update(&mut self, input: &[u8], output: &mut Vec<u8>) {
        match self {
            Encryptor::Ecb(t) => t.update(input, output),
            Encryptor::Cbc(t) => t.update(input, output),
            Encryptor::Cfb(t) => t.update(input, output),
        }
    }

    fn finalize(self, output: &mut Vec<u8>) {
        match self {
            Encryptor::Ecb(t) => t.finalize(output),
            Encryptor::Cbc(t) => t.finalize(output),
            Encryptor::Cfb(t) => t.finalize(output),
        }
    }
}

/// Run `plaintext` through `transform` in one call.
pub fn encrypt_bytes<T: EncryptTransform>(mut transform: T, plaintext: &[u8]) -> Vec<u8> {
    let mut ciphertext = Vec::with_capacity(plaintext.len() + crate::cipher::BLOCK_SIZE);
    transform.update(plaintext, &mut ciphertext);
    transform.finalize(&mut ciphertext);
    ciphertext
}

/// Test-only ciphers that make the chaining structure visible.
#[cfg(test)]
pub(crate) mod test_support {
    use crate::cipher::{Block, BlockCipher};

    /// Leaves blocks untouched.
    pub struct IdentityCipher;

    impl BlockCipher for IdentityCipher {
        fn encrypt_block(&self, _block: &mut Block) {}
        fn decrypt_block(&self, _block: &mut Block) {}
    }

    /// XORs every block with a fixed pattern. Never use outside tests.
    pub struct XorCipher(pub u8);

    impl BlockCipher for XorCipher {
        fn encrypt_block(&self, block: &mut Block) {
            block.iter_mut().for_each(|b| *b ^= self.0);
        }
        fn decrypt_block(&self, block: &mut Block) {
            self.encrypt_block(block)
        }
    }
}
