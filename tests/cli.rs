use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

const TOTP_KEY: &str = "GEZDGNBVGY3TQOJQ";

fn token_file(dir: &TempDir, contents: &str, mode: u32) -> PathBuf {
    let path = dir.path().join("token");
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

fn otp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_otp"))
        .args(args)
        .env_clear()
        .output()
        .unwrap()
}

#[test]
fn prints_only_a_six_digit_code() {
    let dir = TempDir::new().unwrap();
    let path = token_file(&dir, &format!("{}\n", TOTP_KEY), 0o600);

    let output = otp(&[path.to_str().unwrap()]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.len(), 7, "{:?}", stdout);
    assert!(stdout.ends_with('\n'));
    assert!(stdout.trim_end().chars().all(|c| c.is_ascii_digit()));
    assert_eq!(output.stderr, Vec::<u8>::new());
}

#[test]
fn missing_argument_exits_with_one() {
    let output = otp(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, Vec::<u8>::new());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("ERROR: usage error"), "{}", stderr);
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn help_exits_with_zero() {
    let output = otp(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
}

#[rstest]
#[case("GEZDGNBVGY3TQOJQ\n", 0o644, "ERROR: permission error")]
#[case("GEZDGNBVGY3TQOJQ\n", 0o660, "ERROR: permission error")]
#[case("", 0o600, "ERROR: io error")]
#[case("GEZDGNBVGY3TQOJ1\n", 0o600, "ERROR: decode error")]
#[case("GEZDGNBVGY3TQOJQ====\n", 0o600, "ERROR: decode error")]
fn failures_exit_with_one_and_a_diagnostic(
    #[case] contents: &str,
    #[case] mode: u32,
    #[case] prefix: &str,
) {
    let dir = TempDir::new().unwrap();
    let path = token_file(&dir, contents, mode);

    let output = otp(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, Vec::<u8>::new());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with(prefix), "{}", stderr);
    assert!(!stderr.contains(TOTP_KEY), "{}", stderr);
}

#[test]
fn missing_token_file_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent");

    let output = otp(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("ERROR: io error: can't open token file"), "{}", stderr);
}
