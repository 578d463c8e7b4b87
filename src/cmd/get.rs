use crate::base32::{self, MAX_SECRET_LEN};
use crate::error::OtpError;
use crate::hotp::{get_hotp, OneTimeCode};
use crate::store::SecretSource;
use crate::totp::{get_totp_moving_factor, GetTime};
use crate::writer::OutErr;

/// Prints the code for the current time step of the token named by
/// `identifier`.
///
/// Nothing reaches `writer` unless every stage succeeds.
pub fn run_get<W>(
    identifier: &str,
    secret_source: &impl SecretSource,
    clock: &impl GetTime,
    writer: &mut W,
) -> Result<OneTimeCode, OtpError>
where
    W: OutErr,
{
    let encoded = secret_source.load(identifier)?;
    let secret = base32::decode(&encoded, MAX_SECRET_LEN)?;
    drop(encoded);
    if secret.is_empty() {
        log::warn!("token {} decodes to an empty key", identifier);
    } else {
        log::debug!("decoded {} byte key", secret.len());
    }

    let moving_factor = get_totp_moving_factor(clock)?;
    log::debug!("moving factor {}", moving_factor);

    let otp = get_hotp(secret.as_bytes(), moving_factor);
    writer
        .write(&format!("{}\n", otp))
        .map_err(OtpError::Output)?;

    Ok(otp)
}
