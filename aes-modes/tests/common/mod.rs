#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_modes::{Aes128Cipher, Block, BlockCipher, Chaining, ResolvedConfig, BLOCK_SIZE};
use rand::{rng, RngCore};

pub const KEY_HEX: &str = "770A8A65DA156D24EE2A093277530142";
pub const IV_HEX: &str = "0f0e0d0c0b0a09080706050403020100";

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng().fill_bytes(&mut buf);
    buf
}

pub fn write_input(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}

/// Inverse of the configured encrypt transform, built from the cipher's
/// block decryption.
pub fn decrypt(config: &ResolvedConfig, ciphertext: &[u8]) -> Vec<u8> {
    let cipher = Aes128Cipher::new(config.key().as_bytes()).unwrap();
    match config.chaining() {
        Chaining::Ecb => {
            let mut plaintext = Vec::with_capacity(ciphertext.len());
            for chunk in ciphertext.chunks(BLOCK_SIZE) {
                let mut block = to_block(chunk);
                cipher.decrypt_block(&mut block);
                plaintext.extend_from_slice(&block);
            }
            strip_pkcs7(plaintext)
        }
        Chaining::Cbc(iv) => {
            let mut plaintext = Vec::with_capacity(ciphertext.len());
            let mut previous = *iv.as_bytes();
            for chunk in ciphertext.chunks(BLOCK_SIZE) {
                let current = to_block(chunk);
                let mut block = current;
                cipher.decrypt_block(&mut block);
                for (b, p) in block.iter_mut().zip(previous.iter()) {
                    *b ^= p;
                }
                plaintext.extend_from_slice(&block);
                previous = current;
            }
            strip_pkcs7(plaintext)
        }
        Chaining::Cfb(iv) => {
            let mut plaintext = Vec::with_capacity(ciphertext.len());
            let mut register = *iv.as_bytes();
            for chunk in ciphertext.chunks(BLOCK_SIZE) {
                let mut keystream = register;
                cipher.encrypt_block(&mut keystream);
                plaintext.extend(chunk.iter().zip(keystream.iter()).map(|(c, k)| c ^ k));
                if chunk.len() == BLOCK_SIZE {
                    register = to_block(chunk);
                }
            }
            plaintext
        }
    }
}

fn to_block(chunk: &[u8]) -> Block {
    assert_eq!(chunk.len(), BLOCK_SIZE, "ciphertext is not block aligned");
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

fn strip_pkcs7(mut data: Vec<u8>) -> Vec<u8> {
    let pad = *data.last().expect("padded data is never empty") as usize;
    assert!((1..=BLOCK_SIZE).contains(&pad), "bad padding length {pad}");
    assert!(data[data.len() - pad..].iter().all(|&b| b as usize == pad));
    data.truncate(data.len() - pad);
    data
}
