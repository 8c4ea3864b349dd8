use thiserror::Error;

#[derive(Debug, Error)]
pub enum PulseError {
    #[error("failed to open serial port {port}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("failed to drive DTR {}", level_name(.level))]
    SetDtr {
        level: bool,
        #[source]
        source: serialport::Error,
    },
}

fn level_name(level: &bool) -> &'static str {
    if *level {
        "high"
    } else {
        "low"
    }
}

impl PulseError {
    /// The underlying serial library error kind.
    pub fn kind(&self) -> serialport::ErrorKind {
        match self {
            Self::Open { source, .. } | Self::SetDtr { source, .. } => source.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::ErrorKind;
    use std::error::Error as _;

    #[test]
    fn messages_name_the_failed_step() {
        let open = PulseError::Open {
            port: "COM7".into(),
            source: serialport::Error::new(ErrorKind::NoDevice, "not found"),
        };
        assert_eq!(open.to_string(), "failed to open serial port COM7");
        assert_eq!(open.source().unwrap().to_string(), "not found");

        let high = PulseError::SetDtr {
            level: true,
            source: serialport::Error::new(ErrorKind::Unknown, "ioctl"),
        };
        assert_eq!(high.to_string(), "failed to drive DTR high");

        let low = PulseError::SetDtr {
            level: false,
            source: serialport::Error::new(ErrorKind::Unknown, "ioctl"),
        };
        assert_eq!(low.to_string(), "failed to drive DTR low");
    }

    #[test]
    fn kind_comes_from_the_source() {
        let err = PulseError::Open {
            port: "/dev/ttyUSB0".into(),
            source: serialport::Error::new(ErrorKind::NoDevice, "gone"),
        };
        assert_eq!(err.kind(), ErrorKind::NoDevice);
    }
}
