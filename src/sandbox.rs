use crate::error::OtpError;

/// Drops every privilege except stdio and reading files for the rest of the
/// process. Only OpenBSD has a mechanism for this; elsewhere it does nothing.
#[cfg(target_os = "openbsd")]
pub fn restrict() -> Result<(), OtpError> {
    use std::io;
    use std::os::raw::{c_char, c_int};
    use std::ptr;

    extern "C" {
        fn pledge(promises: *const c_char, execpromises: *const c_char) -> c_int;
    }

    let promises = b"stdio rpath\0";
    // SAFETY: `promises` is NUL-terminated and outlives the call; a null
    // execpromises leaves exec promises unchanged.
    let rc = unsafe { pledge(promises.as_ptr().cast(), ptr::null()) };
    if rc == -1 {
        return Err(OtpError::Sandbox(io::Error::last_os_error()));
    }

    log::debug!("pledged \"stdio rpath\"");
    Ok(())
}

#[cfg(not(target_os = "openbsd"))]
pub fn restrict() -> Result<(), OtpError> {
    log::debug!("no privilege restriction available on this platform");
    Ok(())
}
