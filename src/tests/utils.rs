use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

// Writes `contents` to `dir/name` and sets its mode exactly, ignoring umask
pub fn write_token_file(dir: &TempDir, name: &str, contents: &str, mode: u32) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}
