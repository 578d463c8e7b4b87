use std::fmt::{self, Debug};

use zeroize::Zeroizing;

use crate::error::DecodeError;

// RFC 4648 base32 -> raw key bytes

/// Upper bound on the decoded length of any secret this tool handles.
pub const MAX_SECRET_LEN: usize = 1024;

/// Raw shared secret.
///
/// A bounded buffer: the length is fixed when the secret is created and can
/// never exceed the capacity it was decoded against. Wiped on drop.
pub struct Secret {
    bytes: Zeroizing<Vec<u8>>,
}

impl Secret {
    fn zeroed(len: usize, capacity: usize) -> Result<Self, DecodeError> {
        if len > capacity {
            return Err(DecodeError::BufferTooSmall {
                required: len,
                capacity,
            });
        }

        Ok(Secret {
            bytes: Zeroizing::new(vec![0u8; len]),
        })
    }

    // OR the high bits of a 5-bit group into place; bits past the end are
    // the trailing partial byte and are dropped
    fn merge(&mut self, index: usize, bits: u8) {
        if let Some(byte) = self.bytes.get_mut(index) {
            *byte |= bits;
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret([REDACTED; {} bytes])", self.len())
    }
}

/// Number of whole bytes carried by `symbols` base32 characters.
pub fn decoded_len(symbols: usize) -> usize {
    symbols * 5 / 8
}

fn symbol_value(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'a'..=b'z' => Some(symbol - b'a'),
        b'2'..=b'7' => Some(symbol - b'2' + 26),
        _ => None,
    }
}

/// Decodes an unpadded RFC 4648 base32 string (either case) into at most
/// `capacity` bytes.
///
/// The output is always `floor(5 * n / 8)` bytes long for `n` input
/// characters. Padding characters are rejected like any other symbol outside
/// the alphabet.
pub fn decode(encoded: impl AsRef<[u8]>, capacity: usize) -> Result<Secret, DecodeError> {
    let encoded = encoded.as_ref();
    let mut secret = Secret::zeroed(decoded_len(encoded.len()), capacity)?;

    for (i, &symbol) in encoded.iter().enumerate() {
        let value = symbol_value(symbol).ok_or(DecodeError::InvalidCharacter { position: i })?;

        let bit = 5 * i;
        let index = bit / 8;
        let shift = bit % 8;

        // left-align the group at `shift` inside a 16-bit window spanning
        // bytes `index` and `index + 1`
        let window = u16::from(value) << (11 - shift);
        secret.merge(index, (window >> 8) as u8);
        if shift >= 4 {
            secret.merge(index + 1, (window & 0xff) as u8);
        }
    }

    Ok(secret)
}
