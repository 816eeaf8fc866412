//! Key, IV and per-mode cipher configuration

use std::fmt;

use log::debug;
use rand::RngCore;

use crate::cipher::Aes128Cipher;
use crate::codec::{decode_hex_array, encode_hex};
use crate::error::{LengthUnit, ModeError, Result};
use crate::modes::Encryptor;

/// Key length in bytes. Only AES-128 is supported.
pub const KEY_LEN: usize = 16;

/// IV length in bytes.
pub const IV_LEN: usize = 16;

/// Chaining mode selector. Carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChainingMode {
    Ecb,
    Cbc,
    Cfb,
}

impl ChainingMode {
    /// Every mode, in the order runs are performed and reported.
    pub const ALL: [ChainingMode; 3] = [ChainingMode::Ecb, ChainingMode::Cbc, ChainingMode::Cfb];

    /// Lowercase name, used in artifact file names.
    pub fn name(&self) -> &'static str {
        match self {
            ChainingMode::Ecb => "ecb",
            ChainingMode::Cbc => "cbc",
            ChainingMode::Cfb => "cfb",
        }
    }

    pub fn uses_iv(&self) -> bool {
        !matches!(self, ChainingMode::Ecb)
    }
}

impl fmt::Display for ChainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainingMode::Ecb => f.write_str("ECB"),
            ChainingMode::Cbc => f.write_str("CBC"),
            ChainingMode::Cfb => f.write_str("CFB"),
        }
    }
}

/// A 128-bit AES key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Key128([u8; KEY_LEN]);

impl Key128 {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_LEN] = bytes.try_into().map_err(|_| ModeError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: bytes.len(),
            unit: LengthUnit::Bytes,
        })?;
        Ok(Self(key))
    }

    /// Parse 32 hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        decode_hex_array::<KEY_LEN>(hex).map(Self).map_err(|err| match err {
            ModeError::InvalidHexLength { expected, actual } => ModeError::InvalidKeyLength {
                expected,
                actual,
                unit: LengthUnit::HexDigits,
            },
            other => other,
        })
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for Key128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key128(..)")
    }
}

/// A 128-bit initialization vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iv([u8; IV_LEN]);

impl Iv {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let iv: [u8; IV_LEN] = bytes.try_into().map_err(|_| ModeError::InvalidIvLength {
            expected: IV_LEN,
            actual: bytes.len(),
            unit: LengthUnit::Bytes,
        })?;
        Ok(Self(iv))
    }

    /// Parse 32 hex digits, first byte first.
    pub fn from_hex(hex: &str) -> Result<Self> {
        decode_hex_array::<IV_LEN>(hex).map(Self).map_err(|err| match err {
            ModeError::InvalidHexLength { expected, actual } => ModeError::InvalidIvLength {
                expected,
                actual,
                unit: LengthUnit::HexDigits,
            },
            other => other,
        })
    }

    /// Fresh IV from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut iv = [0u8; IV_LEN];
        rand::rng().fill_bytes(&mut iv);
        Self(iv)
    }

    pub fn as_bytes(&self) -> &[u8; IV_LEN] {
        &self.0
    }

    /// 32 lowercase hex digits, first byte first. Feeding this back to
    /// [`Iv::from_hex`] yields the same IV.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl fmt::Display for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Mode plus the state that mode needs. ECB has no IV slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chaining {
    Ecb,
    Cbc(Iv),
    Cfb(Iv),
}

impl Chaining {
    pub fn mode(&self) -> ChainingMode {
        match self {
            Chaining::Ecb => ChainingMode::Ecb,
            Chaining::Cbc(_) => ChainingMode::Cbc,
            Chaining::Cfb(_) => ChainingMode::Cfb,
        }
    }

    pub fn iv(&self) -> Option<&Iv> {
        match self {
            Chaining::Ecb => None,
            Chaining::Cbc(iv) | Chaining::Cfb(iv) => Some(iv),
        }
    }
}

/// Immutable, validated configuration for one mode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    key: Key128,
    chaining: Chaining,
    generated_iv: Option<Iv>,
}

impl ResolvedConfig {
    pub fn mode(&self) -> ChainingMode {
        self.chaining.mode()
    }

    pub fn key(&self) -> &Key128 {
        &self.key
    }

    pub fn chaining(&self) -> &Chaining {
        &self.chaining
    }

    /// IV the transform will use; always `None` for ECB.
    pub fn iv(&self) -> Option<&Iv> {
        self.chaining.iv()
    }

    /// Set only when the IV was generated rather than supplied.
    pub fn generated_iv(&self) -> Option<&Iv> {
        self.generated_iv.as_ref()
    }

    /// Key the AES engine and set up the mode transform.
    pub fn encryptor(&self) -> Result<Encryptor<Aes128Cipher>> {
        let cipher = Aes128Cipher::new(self.key.as_bytes())?;
        Ok(Encryptor::new(cipher, &self.chaining))
    }
}

/// Builder for [`ResolvedConfig`].
pub struct CipherConfig;

impl CipherConfig {
    /// Validate key and IV and resolve the configuration for `mode`.
    ///
    /// A supplied IV must be 16 bytes for every mode, ECB included, but ECB
    /// never keeps it. CBC and CFB draw a random IV when none is supplied and
    /// record it in [`ResolvedConfig::generated_iv`].
    pub fn build(mode: ChainingMode, key: &[u8], iv: Option<&[u8]>) -> Result<ResolvedConfig> {
        let key = Key128::from_bytes(key)?;
        let supplied = iv.map(Iv::from_bytes).transpose()?;

        let (chaining, generated_iv) = match mode {
            ChainingMode::Ecb => (Chaining::Ecb, None),
            ChainingMode::Cbc | ChainingMode::Cfb => {
                let (iv, generated) = match supplied {
                    Some(iv) => (iv, None),
                    None => {
                        let iv = Iv::generate();
                        debug!("{mode}: no IV supplied, generated one");
                        (iv, Some(iv))
                    }
                };
                let chaining = if mode == ChainingMode::Cbc {
                    Chaining::Cbc(iv)
                } else {
                    Chaining::Cfb(iv)
                };
                (chaining, generated)
            }
        };

        Ok(ResolvedConfig {
            key,
            chaining,
            generated_iv,
        })
    }
}
