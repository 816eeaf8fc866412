//! Chunked stream and file encryption

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use log::debug;

use crate::cipher::BLOCK_SIZE;
use crate::config::{ChainingMode, ResolvedConfig};
use crate::error::{IoStage, ModeError, Result};
use crate::modes::EncryptTransform;

/// Default read size. Unrelated to the cipher block size: any chunk size
/// gives the same ciphertext.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(4096) {
    Some(size) => size,
    None => unreachable!(),
};

/// Streams plaintext through a resolved mode transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingEncryptor {
    chunk_size: NonZeroUsize,
}

impl Default for StreamingEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingEncryptor {
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(chunk_size: NonZeroUsize) -> Self {
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Encrypt `input` into `output` (created or truncated).
    ///
    /// The input is opened first so a missing input never leaves an empty
    /// output behind. Both handles are closed on every return path; on
    /// success the output has been flushed, padding included. Returns the
    /// number of plaintext bytes read.
    pub fn encrypt_file(&self, config: &ResolvedConfig, input: &Path, output: &Path) -> Result<u64> {
        let mode = config.mode();

        let reader = File::open(input)
            .map_err(|e| ModeError::io(mode, IoStage::OpenInput(input.to_path_buf()), 0, e))?;
        let file = File::create(output)
            .map_err(|e| ModeError::io(mode, IoStage::CreateOutput(output.to_path_buf()), 0, e))?;

        debug!("{mode}: {} -> {}", input.display(), output.display());

        let mut writer = BufWriter::new(file);
        let consumed = self.encrypt_stream(config, reader, &mut writer)?;

        // Surface flush errors instead of losing them in drop.
        writer
            .into_inner()
            .map_err(|e| ModeError::io(mode, IoStage::Flush, 0, e.into_error()))?;

        Ok(consumed)
    }

    /// Encrypt everything `reader` yields into `writer`.
    ///
    /// The transform is finalized once, after the reader reports end of
    /// input, and `writer` is flushed before returning.
    pub fn encrypt_stream<R, W>(&self, config: &ResolvedConfig, mut reader: R, mut writer: W) -> Result<u64>
    where
        R: Read,
        W: Write,
    {
        let mode = config.mode();
        let mut transform = config.encryptor()?;

        let mut chunk = vec![0u8; self.chunk_size.get()];
        let mut ciphertext = Vec::with_capacity(self.chunk_size.get() + BLOCK_SIZE);
        let mut consumed: u64 = 0;
        let mut written: u64 = 0;

        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ModeError::io(mode, IoStage::Read, consumed, e)),
            };
            consumed += n as u64;

            ciphertext.clear();
            transform.update(&chunk[..n], &mut ciphertext);
            write_out(&mut writer, &ciphertext, mode, &mut written)?;
        }

        ciphertext.clear();
        transform.finalize(&mut ciphertext);
        debug!("{mode}: finalized with {} trailing bytes", ciphertext.len());
        write_out(&mut writer, &ciphertext, mode, &mut written)?;

        writer
            .flush()
            .map_err(|e| ModeError::io(mode, IoStage::Flush, written, e))?;

        debug!("{mode}: {consumed} plaintext bytes -> {written} ciphertext bytes");
        Ok(consumed)
    }
}

fn write_out<W: Write>(writer: &mut W, bytes: &[u8], mode: ChainingMode, written: &mut u64) -> Result<()> {
    if bytes.is_empty() {
        return Ok(());
    }
    writer
        .write_all(bytes)
        .map_err(|e| ModeError::io(mode, IoStage::Write, *written, e))?;
    *written += bytes.len() as u64;
    Ok(())
}
