use std::io;
use std::path::PathBuf;
use std::time::SystemTimeError;

/// Failures while turning base32 text into secret bytes.
///
/// Neither variant carries the offending input; only positions and sizes.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base32 character at position {position}")]
    InvalidCharacter { position: usize },
    #[error("decoded secret needs {required} bytes but only {capacity} are available")]
    BufferTooSmall { required: usize, capacity: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum TokenFileError {
    #[error("can't open token file {}: {source}", .path.display())]
    OpenFailed { path: PathBuf, source: io::Error },
    #[error("unable to read token file {}: {source}", .path.display())]
    ReadFailed { path: PathBuf, source: io::Error },
    #[error("token file {} is empty", .path.display())]
    EmptyFile { path: PathBuf },
}

#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    #[error("usage error: {0}")]
    Usage(String),
    #[error("permission error: token file {} must be readable by owner only (mode {mode:04o})", .path.display())]
    Permission { path: PathBuf, mode: u32 },
    #[error("io error: {0}")]
    TokenFile(#[from] TokenFileError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("clock error: system time is before the unix epoch ({0})")]
    Clock(#[from] SystemTimeError),
    #[error("output error: {0}")]
    Output(io::Error),
    #[error("sandbox error: {0}")]
    Sandbox(io::Error),
}
