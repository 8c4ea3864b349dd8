use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// Pulse DTR on a serial port to reset the board attached to it.
#[derive(Debug, Parser)]
#[command(name = "dtrpulse", version, about, long_about = None)]
pub struct Args {
    /// Serial device, e.g. /dev/ttyUSB0 or COM3
    pub port: OsString,
}

/// The command line did not hold exactly one argument, or asked for help.
#[derive(Debug)]
pub enum UsageError {
    WrongCount(usize),
    Clap(clap::Error),
}

impl UsageError {
    /// `--help` or `--version` was requested rather than a port.
    pub fn is_informational(&self) -> bool {
        match self {
            Self::WrongCount(_) => false,
            Self::Clap(e) => matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion),
        }
    }

    pub fn print(&self) -> std::io::Result<()> {
        match self {
            Self::WrongCount(_) => Ok(()),
            Self::Clap(e) => e.print(),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount(n) => write!(f, "expected one argument, got {n}"),
            Self::Clap(e) => write!(f, "{}", e.kind()),
        }
    }
}

const INFO_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Parses the full argv, program name included.
///
/// The argument count is checked before clap sees anything, so `--` and
/// dash-leading names count as ordinary arguments and a lone one is taken as
/// the device path.
pub fn parse<I, T>(args: I) -> Result<Args, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if argv.len() != 2 {
        return Err(UsageError::WrongCount(argv.len().saturating_sub(1)));
    }

    let port = argv.pop().unwrap_or_default();
    let bin = argv.pop().unwrap_or_default();
    let is_info_flag = INFO_FLAGS.iter().any(|flag| port.as_os_str() == OsStr::new(flag));

    let parsed = if is_info_flag {
        Args::try_parse_from([bin, port])
    } else {
        Args::try_parse_from([bin, OsString::from("--"), port])
    };
    parsed.map_err(UsageError::Clap)
}
