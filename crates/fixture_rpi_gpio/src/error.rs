use std::fmt::{Debug, Formatter};

use fixture_core::error::FixtureBuildError;

pub struct GpioError {
    pub message: String,
}

impl Debug for GpioError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        fmt.write_str(&self.message)
    }
}

impl From<&str> for GpioError {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<String> for GpioError {
    fn from(s: String) -> Self {
        Self { message: s }
    }
}

impl From<rppal::gpio::Error> for GpioError {
    fn from(err: rppal::gpio::Error) -> Self {
        Self {
            message: format!("RpiGpioError - Cause: {}", err),
        }
    }
}

impl From<rppal::i2c::Error> for GpioError {
    fn from(err: rppal::i2c::Error) -> Self {
        Self {
            message: format!("RpiI2cError - Cause: {}", err),
        }
    }
}

impl From<GpioError> for FixtureBuildError {
    fn from(err: GpioError) -> Self {
        FixtureBuildError::from_string(err.message)
    }
}
