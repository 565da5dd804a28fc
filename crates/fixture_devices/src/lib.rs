//!Drivers for the i2c devices on the pressure-test fixture. Each driver is
//! generic over the `embedded-hal` 1.0 bus and pin traits, so it can run
//! against real hardware (see `fixture_rpi_gpio`) or against test doubles.

pub mod devices;
pub mod error;

#[cfg(test)]
pub(crate) mod testutil;
