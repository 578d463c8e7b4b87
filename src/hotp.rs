use std::fmt::{self, Display};

use hmac::{Hmac, Mac};
use sha1::Sha1;

// HOTP https://datatracker.ietf.org/doc/html/rfc4226

type HmacSha1 = Hmac<Sha1>;

pub const DIGITS: u32 = 6;
const DIGEST_LEN: usize = 20;

/// A one-time password, rendered as exactly `DIGITS` zero-padded digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneTimeCode(u32);

impl Display for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = DIGITS as usize)
    }
}

/// HOTP value of `secret` at `moving_factor` (RFC 4226 §5.3).
pub fn get_hotp(secret: &[u8], moving_factor: u64) -> OneTimeCode {
    let hmac = make_hmac(secret, moving_factor);
    truncate(&hmac)
}

// HMAC_SHA-1 -> 20 byte string
fn make_hmac(secret: &[u8], moving_factor: u64) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(&moving_factor.to_be_bytes());
    let result = mac.finalize();

    result.into_bytes().to_vec()
}

// reduce to 4 byte string
// then s to num mod 10^Digit
fn truncate(hmac: &[u8]) -> OneTimeCode {
    let base_code = dynamic_truncation(hmac);

    OneTimeCode(base_code % u32::pow(10, DIGITS))
}

// Offset is the low 4 bits of String[19]; return the last 31 bits of
// String[Offset]...String[Offset+3]
fn dynamic_truncation(hmac: &[u8]) -> u32 {
    assert!(
        hmac.len() >= DIGEST_LEN,
        "HMAC-SHA1 digest is {} bytes, expected {}",
        hmac.len(),
        DIGEST_LEN
    );

    let offset = (hmac[DIGEST_LEN - 1] & 0xf) as usize;
    (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32) << 16
        | (hmac[offset + 2] as u32) << 8
        | hmac[offset + 3] as u32
}
