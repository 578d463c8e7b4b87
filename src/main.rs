use std::process;

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::LevelFilter;

mod base32;
mod cmd;
mod error;
mod hotp;
mod sandbox;
mod store;
mod totp;
mod writer;


use crate::cmd::get::run_get;
use crate::error::OtpError;
use crate::store::{SecretStore, DEFAULT_TOKEN_DIR};
use crate::totp::Clock;
use crate::writer::{OtpWriter, OutErr};

// stderr only; stdout carries nothing but the code
fn start_logger(level: LevelFilter) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(level.as_str().to_lowercase())?.start()
}

fn run(writer: &mut OtpWriter) -> Result<(), OtpError> {
    let args = cmd::parse_args(std::env::args_os())?;
    let _logger = start_logger(args.log_level).ok();

    sandbox::restrict()?;

    let store = SecretStore::new(DEFAULT_TOKEN_DIR);
    run_get(&args.identifier, &store, &Clock::new(), writer)?;

    Ok(())
}

fn main() {
    let mut writer = OtpWriter::new();

    if let Err(err) = run(&mut writer) {
        let _ = writer.write_err(&format!("ERROR: {}\n", err));
        process::exit(1);
    }
}
