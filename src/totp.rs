use std::time::{SystemTime, SystemTimeError};

// TOTP https://datatracker.ietf.org/doc/html/rfc6238
// HOTP over the number of whole time steps since the unix epoch

pub const TIME_STEP: u64 = 30;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// `floor(unix_time / TIME_STEP)`; fails only when the clock reads earlier
/// than the epoch.
pub fn get_totp_moving_factor(clock: &impl GetTime) -> Result<u64, SystemTimeError> {
    let secs = clock
        .get_now()
        .duration_since(SystemTime::UNIX_EPOCH)?
        .as_secs();

    Ok(secs / TIME_STEP)
}
