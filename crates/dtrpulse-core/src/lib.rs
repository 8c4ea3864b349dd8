//! Core functionalities: opening the port and pulsing its DTR line.

pub mod error;
pub mod pulse;

pub use error::PulseError;
pub use pulse::{
    open_port, pulse_dtr, reset_board, DtrLine, PulseConfig, PulseReport, DEFAULT_BAUD_RATE,
    PULSE_WIDTH,
};
