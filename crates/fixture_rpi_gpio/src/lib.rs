//!This library provides access to the Raspberry Pi i2c buses and GPIO pins. It is a wrapper around the rppal library.
//!
//! The `get_bus` and `get_default_bus` functions get an I2C bus instance
//! that can be used to construct the devices in `fixture_devices`. Note that
//! the MMR920 pressure sensor requires a 100 kHz bus clock; on the Pi the
//! i2c clock is a boot-config setting (`dtparam=i2c_arm_baudrate`), not
//! something that can be changed per bus handle at runtime.

//internal error type for rpi gpio
pub mod error;

pub use rppal;
pub use rppal::hal::Delay;
pub use rppal::i2c::I2c;

use error::GpioError;
use tracing::debug;

//get i2c bus by id
pub fn get_bus(bus: u8) -> Result<I2c, GpioError> {
    debug!("opening i2c bus {}", bus);
    Ok(I2c::with_bus(bus)?)
}

//get default i2c bus
pub fn get_default_bus() -> Result<I2c, GpioError> {
    Ok(I2c::new()?)
}

///Gets a GPIO pin configured as an output, for the multiplexer's reset and
/// address-select lines. With rppal's `hal` feature the returned pin
/// implements `embedded_hal::digital::OutputPin`.
pub fn get_output_pin(pin: u8) -> Result<rppal::gpio::OutputPin, GpioError> {
    let gpio = rppal::gpio::Gpio::new()?;
    let pin = gpio.get(pin)?;
    Ok(pin.into_output())
}
