use std::fmt::{self, Debug};
use std::fs::{self, File, Metadata};
use std::io::Read;
use std::path::{is_separator, Path, PathBuf};

use zeroize::Zeroizing;

use crate::error::{OtpError, TokenFileError};

/// Directory searched for bare token names, fixed when the binary is built.
pub const DEFAULT_TOKEN_DIR: &str = match option_env!("OTP_TOKEN_DIR") {
    Some(dir) => dir,
    None => "/etc/otp",
};

/// Most bytes ever read from a token file.
pub const MAX_TOKEN_FILE_LEN: u64 = 512;

/// Base32 text of a secret, as read from a token file with trailing
/// whitespace removed.
pub struct EncodedSecret {
    text: Zeroizing<Vec<u8>>,
}

impl EncodedSecret {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        EncodedSecret {
            text: Zeroizing::new(text.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl AsRef<[u8]> for EncodedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.text
    }
}

impl Debug for EncodedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedSecret([REDACTED; {} bytes])", self.len())
    }
}

pub trait SecretSource {
    fn load(&self, identifier: &str) -> Result<EncodedSecret, OtpError>;
}

/// Token files on the local filesystem.
pub struct SecretStore {
    token_dir: PathBuf,
}

impl SecretStore {
    pub fn new(token_dir: impl Into<PathBuf>) -> Self {
        SecretStore {
            token_dir: token_dir.into(),
        }
    }

    /// Bare names live in the token directory; anything with a path
    /// separator is taken as given.
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        if identifier.chars().any(is_separator) {
            PathBuf::from(identifier)
        } else {
            self.token_dir.join(identifier)
        }
    }
}

impl SecretSource for SecretStore {
    fn load(&self, identifier: &str) -> Result<EncodedSecret, OtpError> {
        let path = self.resolve(identifier);
        log::info!("reading token file {}", path.display());

        let metadata = fs::metadata(&path).map_err(|source| TokenFileError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        check_permissions(&path, &metadata)?;

        let file = File::open(&path).map_err(|source| TokenFileError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        // the path may have been swapped since the stat above
        let metadata = file.metadata().map_err(|source| TokenFileError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        check_permissions(&path, &metadata)?;

        let contents = read_token(file, &path)?;
        let text = trim_end(&contents);
        if text.is_empty() {
            return Err(TokenFileError::EmptyFile { path }.into());
        }

        Ok(EncodedSecret::new(text))
    }
}

#[cfg(unix)]
fn check_permissions(path: &Path, metadata: &Metadata) -> Result<(), OtpError> {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode() & 0o7777;
    log::debug!("token file mode {:04o}", mode);

    // no rwx for group or other
    if mode & 0o077 != 0 {
        return Err(OtpError::Permission {
            path: path.to_path_buf(),
            mode,
        });
    }

    Ok(())
}

#[cfg(not(unix))]
fn check_permissions(path: &Path, _metadata: &Metadata) -> Result<(), OtpError> {
    // no mode bits to inspect; assume the file is open to everyone
    Err(OtpError::Permission {
        path: path.to_path_buf(),
        mode: 0o777,
    })
}

// single read pass; the handle is dropped on return
fn read_token(file: File, path: &Path) -> Result<Zeroizing<Vec<u8>>, TokenFileError> {
    let mut contents = Zeroizing::new(Vec::with_capacity(MAX_TOKEN_FILE_LEN as usize));
    let byte_count = file
        .take(MAX_TOKEN_FILE_LEN)
        .read_to_end(&mut contents)
        .map_err(|source| TokenFileError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("read {} bytes from token file", byte_count);
    if byte_count == 0 {
        return Err(TokenFileError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    if byte_count as u64 == MAX_TOKEN_FILE_LEN {
        log::warn!(
            "token file {} is {} bytes or longer; anything past that is ignored",
            path.display(),
            MAX_TOKEN_FILE_LEN
        );
    }

    Ok(contents)
}

fn trim_end(contents: &[u8]) -> &[u8] {
    let end = contents
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |last| last + 1);

    &contents[..end]
}
