use std::fmt::{Debug, Formatter};

use fixture_core::error::{FixtureBuildError, InvalidChannel};

///Runtime error from a fixture device. Transport and pin failures are
/// carried as formatted messages from the underlying `embedded-hal`
/// implementation; this layer never retries.
pub enum DeviceError {
    Bus(String),
    Pin(String),
    InvalidChannel(u8),
}

impl DeviceError {
    pub fn bus<E: Debug>(err: E) -> Self {
        Self::Bus(format!("{:?}", err))
    }
    pub fn pin<E: Debug>(err: E) -> Self {
        Self::Pin(format!("{:?}", err))
    }
}

impl Debug for DeviceError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Bus(message) => fmt.write_fmt(format_args!("DeviceError (bus): {}", message)),
            Self::Pin(message) => fmt.write_fmt(format_args!("DeviceError (pin): {}", message)),
            Self::InvalidChannel(channel) => fmt.write_fmt(format_args!(
                "DeviceError: channel {} is out of range 0-7",
                channel
            )),
        }
    }
}

impl From<InvalidChannel> for DeviceError {
    fn from(err: InvalidChannel) -> Self {
        Self::InvalidChannel(err.0)
    }
}

impl From<DeviceError> for FixtureBuildError {
    fn from(err: DeviceError) -> Self {
        FixtureBuildError::from_string(format!("{:?}", err))
    }
}
