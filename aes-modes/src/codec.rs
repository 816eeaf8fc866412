//! Hex decoding into fixed-length byte buffers
//!
//! Strings are decoded pairwise, one byte per two hex digits, most
//! significant digit first. The output always has exactly the requested
//! length: there is no numeric parsing step that could add a sign byte or
//! drop leading zeros.

use crate::error::{ModeError, Result};

/// Decode `hex` into exactly `expected_len` bytes.
///
/// Length is checked first (in characters), then the character set.
pub fn decode_hex(hex: &str, expected_len: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; expected_len];
    decode_into(hex, &mut bytes)?;
    Ok(bytes)
}

/// Decode `hex` into a `[u8; N]`.
pub fn decode_hex_array<const N: usize>(hex: &str) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    decode_into(hex, &mut bytes)?;
    Ok(bytes)
}

/// Lowercase hex rendering, first byte first.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

fn decode_into(hex: &str, out: &mut [u8]) -> Result<()> {
    let expected = out.len() * 2;
    let actual = hex.chars().count();
    if actual != expected {
        return Err(ModeError::InvalidHexLength { expected, actual });
    }

    if let Some((index, character)) = hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(ModeError::InvalidHexCharacter { character, index });
    }

    // Input is now pure ASCII of the right length.
    hex::decode_to_slice(hex, out).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => ModeError::InvalidHexCharacter {
            character: c,
            index,
        },
        _ => ModeError::InvalidHexLength { expected, actual },
    })
}
