use embedded_hal::i2c;
use fixture_core::error::FixtureBuildError;
use serde::Deserialize;
use tracing::debug;

use crate::error::DeviceError;

pub const DEFAULT_ADDRESS: u8 = 0x67;

//single command byte that reboots the chip; the datasheet settle time must
//elapse before the next command, which is the caller's job
pub const RESET_COMMAND: u8 = 0x72;

///The chip mandates a 100 kHz bus clock. On linux hosts the bus speed is a
/// system configuration concern, so the bus provider owns it; see
/// `fixture_rpi_gpio::get_bus`.
pub const BUS_CLOCK_HZ: u32 = 100_000;

//system level config -- corresponds to 1 sensor instance
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Mmr920DeviceConfig {
    pub i2c_address: u8,
}

impl Default for Mmr920DeviceConfig {
    fn default() -> Self {
        Self {
            i2c_address: DEFAULT_ADDRESS,
        }
    }
}

///One connected pressure sensor. Stateless beyond the bus address: every
/// call is a single self-contained transaction, and register-map semantics
/// (which command reads what) belong to the caller.
pub struct Mmr920Device<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Mmr920Device<I2C>
where
    I2C: i2c::I2c,
{
    pub fn build(config: &Mmr920DeviceConfig, i2c: I2C) -> Result<Self, FixtureBuildError> {
        if config.i2c_address > 0x7F {
            return Err(FixtureBuildError::from_string(format!(
                "MMR920 address {:#04x} is not a valid 7-bit i2c address.",
                config.i2c_address
            )));
        }
        Ok(Self {
            i2c,
            address: config.i2c_address,
        })
    }

    ///Issues the reset command as one single-byte write transaction. The
    /// caller must wait the chip's documented settle time before issuing
    /// further commands.
    pub fn reset(&mut self) -> Result<(), DeviceError> {
        debug!("mmr920 {:#04x}: reset", self.address);
        self.write_register(RESET_COMMAND)
    }

    ///Writes one command byte in its own transaction.
    pub fn write_register(&mut self, command: u8) -> Result<(), DeviceError> {
        self.i2c
            .write(self.address, &[command])
            .map_err(DeviceError::bus)
    }

    ///Fills `buffer` from one read transaction. If the transport fails or
    /// comes up short, every requested byte is zeroed before the error is
    /// returned, so the caller never sees a partial fill or stale bytes.
    /// All-zero data is the canonical "sensor not responding" signal.
    pub fn read_registers(&mut self, buffer: &mut [u8]) -> Result<(), DeviceError> {
        if let Err(err) = self.i2c.read(self.address, buffer) {
            buffer.fill(0);
            return Err(DeviceError::bus(err));
        }
        Ok(())
    }

    ///Releases the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
