//! # AES Modes Library
//!
//! Streaming AES-128 encryption of arbitrary files under three block cipher
//! modes of operation, one output artifact per mode.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - independent blocks, PKCS#7 padding, no IV
//! - **CBC** (Cipher Block Chaining) - PKCS#7 padding, requires IV
//! - **CFB** (Cipher Feedback, 128-bit segments) - stream mode, no padding, requires IV
//!
//! ## Usage
//!
//! ```rust
//! use aes_modes::{ChainingMode, CipherConfig, Key128, StreamingEncryptor};
//!
//! let key = Key128::from_hex("770A8A65DA156D24EE2A093277530142")?;
//! let config = CipherConfig::build(ChainingMode::Cbc, key.as_bytes(), Some(&[0u8; 16]))?;
//!
//! let mut ciphertext = Vec::new();
//! let read = StreamingEncryptor::new().encrypt_stream(&config, &b"Hello, World!"[..], &mut ciphertext)?;
//!
//! assert_eq!(read, 13);
//! assert_eq!(ciphertext.len(), 16);
//! # Ok::<(), aes_modes::ModeError>(())
//! ```
//!
//! Whole files go through [`ModeOrchestrator::run_all`], which writes
//! `<prefix>-ecb`, `<prefix>-cbc` and `<prefix>-cfb` next to each other and
//! reports the IV it generated when none was supplied.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod error;
pub mod modes;
pub mod orchestrator;
pub mod stream;
pub mod utils;

pub use cipher::{Aes128Cipher, Block, BlockCipher, BLOCK_SIZE};
pub use codec::{decode_hex, decode_hex_array, encode_hex};
pub use config::{Chaining, ChainingMode, CipherConfig, Iv, Key128, ResolvedConfig, IV_LEN, KEY_LEN};
pub use error::{IoStage, LengthUnit, ModeError, Result};
pub use modes::{encrypt_bytes, EncryptTransform, Encryptor};
pub use orchestrator::{artifact_path, EncryptionJob, ModeArtifact, ModeOrchestrator, RunReport};
pub use stream::{StreamingEncryptor, DEFAULT_CHUNK_SIZE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The fixed key every run uses unless told otherwise.
pub const DEFAULT_KEY_HEX: &str = "770A8A65DA156D24EE2A093277530142";
