use crate::error::PulseError;
use log::debug;
use serialport::{ErrorKind, SerialPort};
use std::ffi::OsStr;
use std::time::Duration;

/// How long DTR is held asserted.
pub const PULSE_WIDTH: Duration = Duration::from_millis(500);

/// Line speed used to open the port. Only the control lines are touched, so
/// this never reaches the wire.
pub const DEFAULT_BAUD_RATE: u32 = 9_600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseConfig {
    pub port_name: String,
    pub baud_rate: u32,
}

impl PulseConfig {
    pub fn new(port_name: impl Into<String>) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }

    /// Builds a config from a raw command-line path. The serial library only
    /// takes UTF-8 names, so anything else is reported as an open failure.
    pub fn from_os_str(port_name: &OsStr) -> Result<Self, PulseError> {
        match port_name.to_str() {
            Some(name) => Ok(Self::new(name)),
            None => Err(PulseError::Open {
                port: port_name.to_string_lossy().into_owned(),
                source: serialport::Error::new(
                    ErrorKind::NoDevice,
                    "device path is not valid UTF-8",
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseReport {
    pub port_name: String,
    pub pulse_width: Duration,
}

/// A handle whose DTR output can be driven.
pub trait DtrLine {
    fn set_dtr(&mut self, level: bool) -> Result<(), serialport::Error>;
}

impl DtrLine for Box<dyn SerialPort> {
    fn set_dtr(&mut self, level: bool) -> Result<(), serialport::Error> {
        self.write_data_terminal_ready(level)
    }
}

/// Opens `cfg.port_name` with the library defaults (8N1, no flow control).
pub fn open_port(cfg: &PulseConfig) -> Result<Box<dyn SerialPort>, PulseError> {
    debug!("opening {} at {} baud", cfg.port_name, cfg.baud_rate);
    serialport::new(&cfg.port_name, cfg.baud_rate)
        .open()
        .map_err(|source| {
            debug!("available ports: {:?}", port_names());
            PulseError::Open {
                port: cfg.port_name.clone(),
                source,
            }
        })
}

/// Drives DTR high, holds it for `width`, then drives it low.
///
/// If asserting fails nothing else is attempted.
pub fn pulse_dtr<L: DtrLine + ?Sized>(line: &mut L, width: Duration) -> Result<(), PulseError> {
    debug!("DTR high");
    line.set_dtr(true)
        .map_err(|source| PulseError::SetDtr { level: true, source })?;

    std::thread::sleep(width);

    debug!("DTR low");
    line.set_dtr(false)
        .map_err(|source| PulseError::SetDtr { level: false, source })
}

/// Opens the port, pulses DTR for [`PULSE_WIDTH`] and closes the port again.
pub fn reset_board(cfg: &PulseConfig) -> Result<PulseReport, PulseError> {
    let mut port = open_port(cfg)?;
    pulse_dtr(&mut port, PULSE_WIDTH)?;
    drop(port);
    debug!("closed {}", cfg.port_name);

    Ok(PulseReport {
        port_name: cfg.port_name.clone(),
        pulse_width: PULSE_WIDTH,
    })
}

fn port_names() -> Vec<String> {
    serialport::available_ports()
        .unwrap_or_default()
        .into_iter()
        .map(|info| info.port_name)
        .collect()
}
