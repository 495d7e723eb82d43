//! Wire encodings for chat public keys.
//!
//! Three encodings are accepted on the wire:
//!
//! - hex: a `0x` marker followed by exactly [`HEX_KEY_DIGITS`] hex digits
//!   carrying the uncompressed key,
//! - multibase: a self-describing prefix character naming the base of the
//!   payload, which decodes to a one-byte format tag plus the uncompressed
//!   key,
//! - compressed: a `z` prefix (base58btc) whose payload decodes to a
//!   two-byte format tag plus 32 bytes of key material.
//!
//! Lengths are validated exactly. Where the expected character count is
//! known up front it is checked before decoding, so a length mistake is
//! reported as [`LinkError::IncorrectKeyLength`] and never as a charset
//! error.

use crate::{LinkError, Result};

/// Marker preceding an uncompressed hex key.
pub const HEX_MARKER: &str = "0x";

/// Hex digits expected after the marker.
pub const HEX_KEY_DIGITS: usize = 130;

/// Byte length of an uncompressed public key.
pub const UNCOMPRESSED_KEY_LEN: usize = 65;

/// Byte length of a decoded multibase payload: format tag plus key.
pub const MULTIBASE_PAYLOAD_LEN: usize = 66;

/// Format tag opening a multibase payload.
pub const KEY_FORMAT_TAG: u8 = 0xe7;

/// Byte length of a decoded compressed payload: two-byte tag plus 32 key
/// bytes.
pub const COMPRESSED_PAYLOAD_LEN: usize = 34;

/// Two-byte format tag opening a compressed payload.
pub const COMPRESSED_FORMAT_TAG: [u8; 2] = [0xe7, 0x01];

/// Multibase prefix selecting base58btc, used only by compressed keys.
/// Base58 mixes case meaningfully, so this prefix never case-folds.
pub const COMPRESSED_PREFIX: char = 'z';

/// Multibase prefixes accepted for uncompressed keys. `z` is deliberately
/// absent: that prefix denotes a compressed key.
pub const MULTIBASE_PREFIXES: [char; 2] = ['f', 'b'];

/// Payload characters for a base16 multibase key.
const MULTIBASE_HEX_DIGITS: usize = 2 * MULTIBASE_PAYLOAD_LEN;

/// Payload characters for a base32 (no padding) multibase key.
const MULTIBASE_BASE32_DIGITS: usize = (MULTIBASE_PAYLOAD_LEN * 8).div_ceil(5);

/// Exact length gate shared by every key validator.
pub fn exact_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(LinkError::IncorrectKeyLength);
    }
    Ok(())
}

/// Decodes the digits of a hex chat key (marker already stripped).
pub fn decode_hex_key(digits: &str) -> Result<Vec<u8>> {
    exact_length(digits.len(), HEX_KEY_DIGITS)?;
    hex::decode(digits).map_err(|_| LinkError::InvalidCharset("hex chat key"))
}

/// Decodes a multibase key, prefix included.
///
/// The leading character names the base of the remaining payload. The
/// payload must decode to [`MULTIBASE_PAYLOAD_LEN`] bytes opening with
/// [`KEY_FORMAT_TAG`].
pub fn decode_multibase_key(text: &str) -> Result<Vec<u8>> {
    let mut chars = text.chars();
    let prefix = chars
        .next()
        .ok_or(LinkError::InvalidCharset("multibase prefix"))?;
    let payload = chars.as_str();

    let bytes = match prefix.to_ascii_lowercase() {
        'f' => {
            exact_length(payload.len(), MULTIBASE_HEX_DIGITS)?;
            hex::decode(payload).map_err(|_| LinkError::InvalidCharset("multibase chat key"))?
        }
        'b' => {
            exact_length(payload.len(), MULTIBASE_BASE32_DIGITS)?;
            data_encoding::BASE32_NOPAD
                .decode(payload.to_ascii_uppercase().as_bytes())
                .map_err(|_| LinkError::InvalidCharset("multibase chat key"))?
        }
        _ => return Err(LinkError::InvalidCharset("multibase prefix")),
    };

    exact_length(bytes.len(), MULTIBASE_PAYLOAD_LEN)?;
    if bytes[0] != KEY_FORMAT_TAG {
        return Err(LinkError::InvalidFormatTag);
    }
    Ok(bytes)
}

/// Decodes a compressed key, `z` prefix included.
///
/// Base58 payload lengths vary with leading zeros, so the byte count is
/// checked after decoding rather than before.
pub fn decode_compressed_key(text: &str) -> Result<Vec<u8>> {
    let payload = text
        .strip_prefix(COMPRESSED_PREFIX)
        .ok_or(LinkError::InvalidCharset("compressed chat key"))?;

    let bytes = bs58::decode(payload)
        .into_vec()
        .map_err(|_| LinkError::InvalidCharset("compressed chat key"))?;

    exact_length(bytes.len(), COMPRESSED_PAYLOAD_LEN)?;
    if bytes[..2] != COMPRESSED_FORMAT_TAG {
        return Err(LinkError::InvalidFormatTag);
    }
    Ok(bytes)
}
