mod args;

use anyhow::{Context, Result};
use dtrpulse_core::{reset_board, PulseConfig};
use env_logger::Env;
use log::{debug, info};
use std::process::ExitCode;

const USAGE_MESSAGE: &str = "Please specify a port";

/// Exit status for a bad command line, -1 as an unsigned byte.
const USAGE_EXIT_CODE: u8 = 255;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match args::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(e) if e.is_informational() => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            debug!("rejected command line: {e}");
            println!("{USAGE_MESSAGE}");
            return Ok(ExitCode::from(USAGE_EXIT_CODE));
        }
    };

    let report = PulseConfig::from_os_str(&args.port)
        .and_then(|cfg| reset_board(&cfg))
        .inspect_err(|e| debug!("serial error kind: {:?}", e.kind()))
        .with_context(|| {
            format!("could not reset board on {}", args.port.to_string_lossy())
        })?;
    info!(
        "pulsed DTR on {} for {:?}",
        report.port_name, report.pulse_width
    );

    Ok(ExitCode::SUCCESS)
}
