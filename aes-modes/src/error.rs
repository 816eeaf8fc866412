//! Error types for key/IV parsing and file encryption

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ChainingMode;

/// Unit a length error is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Bytes,
    HexDigits,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::Bytes => f.write_str("bytes"),
            LengthUnit::HexDigits => f.write_str("hex digits"),
        }
    }
}

/// Step of a file job an I/O error happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoStage {
    OpenInput(PathBuf),
    CreateOutput(PathBuf),
    Read,
    Write,
    Flush,
}

impl fmt::Display for IoStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoStage::OpenInput(path) => write!(f, "opening input {}", path.display()),
            IoStage::CreateOutput(path) => write!(f, "creating output {}", path.display()),
            IoStage::Read => f.write_str("reading input"),
            IoStage::Write => f.write_str("writing output"),
            IoStage::Flush => f.write_str("flushing output"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ModeError {
    #[error("Invalid hex length: expected {expected} characters, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("Invalid hex character {character:?} at position {index}")]
    InvalidHexCharacter { character: char, index: usize },

    #[error("Invalid key length: expected {expected} {unit}, got {actual}")]
    InvalidKeyLength {
        expected: usize,
        actual: usize,
        unit: LengthUnit,
    },

    #[error("Invalid IV length: expected {expected} {unit}, got {actual}")]
    InvalidIvLength {
        expected: usize,
        actual: usize,
        unit: LengthUnit,
    },

    /// `offset` counts plaintext bytes for reads and ciphertext bytes for writes.
    #[error("{mode}: I/O error while {stage} at byte {offset}: {source}")]
    Io {
        mode: ChainingMode,
        stage: IoStage,
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("Transform error: {0}")]
    Transform(String),
}

impl ModeError {
    pub(crate) fn io(mode: ChainingMode, stage: IoStage, offset: u64, source: io::Error) -> Self {
        ModeError::Io {
            mode,
            stage,
            offset,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModeError>;
