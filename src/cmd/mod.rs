pub mod get;

use clap::{arg, command, error::ErrorKind, ArgMatches, Command};
use log::LevelFilter;

use crate::error::OtpError;

pub const USAGE: &str = "otp [-v...] [path/to/]tokenfile";

pub fn command() -> Command<'static> {
    command!("otp")
        .about("Print the current time-based one-time password for a token file")
        .args(&[
            arg!([TOKEN] "Token name under the default token directory, or a path to a token file"),
            arg!(-v --verbose ... "More diagnostics on stderr (repeatable)"),
        ])
}

/// Parsed command line.
#[derive(Debug, PartialEq)]
pub struct Args {
    pub identifier: String,
    pub log_level: LevelFilter,
}

impl Args {
    fn from_matches(matches: &ArgMatches) -> Result<Self, OtpError> {
        let identifier = match matches.value_of("TOKEN") {
            Some(identifier) => identifier.to_string(),
            None => return Err(OtpError::Usage(format!("missing token file; usage: {}", USAGE))),
        };

        let log_level = match matches.occurrences_of("verbose") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };

        Ok(Args {
            identifier,
            log_level,
        })
    }
}

/// Parses `argv`.
///
/// Help and version requests are printed and exit the process with status 0;
/// every other parse failure becomes a one-line usage error.
pub fn parse_args<I, T>(argv: I) -> Result<Args, OtpError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = match command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let rendered = err.to_string();
            let reason = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .trim();
            return Err(OtpError::Usage(format!("{}; usage: {}", reason, USAGE)));
        }
    };

    Args::from_matches(&matches)
}
