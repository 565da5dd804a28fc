use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c;
use fixture_core::{error::FixtureBuildError, ChannelMask};
use serde::Deserialize;
use tracing::debug;

use crate::error::DeviceError;

//the chip decodes 0x70 + the three address pin levels
pub const ADDRESS_RANGE_MIN: u8 = 0x70;
pub const ADDRESS_RANGE_MAX: u8 = 0x77;
pub const DEFAULT_ADDRESS: u8 = 0x70;

//time for the chip to settle after a reset edge
pub const DEFAULT_RESET_SETTLE_MS: u32 = 10;

///How many address-select lines the chip has. Each one contributes one bit
/// to the effective i2c address.
pub const ADDRESS_PIN_COUNT: usize = 3;

//system level config -- corresponds to 1 multiplexer chip instance
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Pca9548DeviceConfig {
    pub i2c_address: u8,
    pub reset_settle_ms: u32,
}

impl Default for Pca9548DeviceConfig {
    fn default() -> Self {
        Self {
            i2c_address: DEFAULT_ADDRESS,
            reset_settle_ms: DEFAULT_RESET_SETTLE_MS,
        }
    }
}

///Placeholder pin type for boards where the reset and address-select lines
/// are not wired. Never driven; `Pca9548Pins::none()` uses it so callers
/// without pins don't have to name a pin type.
pub struct NoPin;

impl embedded_hal::digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

///The optional hardware lines of one multiplexer. A `None` entry means the
/// line is not physically wired and must never be driven.
pub struct Pca9548Pins<P> {
    pub reset: Option<P>,
    pub addr: [Option<P>; ADDRESS_PIN_COUNT],
}

impl Pca9548Pins<NoPin> {
    ///No reset line, no address-select lines.
    pub fn none() -> Self {
        Self {
            reset: None,
            addr: [None, None, None],
        }
    }
}

impl<P> Pca9548Pins<P> {
    fn has_addr_pins(&self) -> bool {
        self.addr.iter().any(|pin| pin.is_some())
    }
}

///One connected multiplexer chip. The in-memory channel mask always equals
/// the register value of the last attempted hardware write.
pub struct Pca9548Device<I2C, P> {
    i2c: I2C,
    address: u8,
    channel_mask: ChannelMask,
    pins: Pca9548Pins<P>,
    reset_settle_ms: u32,
}

impl<I2C, P> Pca9548Device<I2C, P>
where
    I2C: i2c::I2c,
    P: OutputPin,
{
    ///Validates the configuration and binds the bus handle. No hardware
    /// access happens until `begin`.
    pub fn build(
        config: &Pca9548DeviceConfig,
        i2c: I2C,
        pins: Pca9548Pins<P>,
    ) -> Result<Self, FixtureBuildError> {
        let address = config.i2c_address;
        let in_range = (ADDRESS_RANGE_MIN..=ADDRESS_RANGE_MAX).contains(&address);
        if pins.has_addr_pins() && !in_range {
            //the low 3 bits of (address - 0x70) drive the pins, so a
            //pin-derived address must come from the chip's decode window
            return Err(FixtureBuildError::from_string(format!(
                "PCA9548 address {:#04x} cannot be derived from address-select pins. Addresses with wired address pins must be in {:#04x}-{:#04x}.",
                address, ADDRESS_RANGE_MIN, ADDRESS_RANGE_MAX
            )));
        }
        if address > 0x7F {
            return Err(FixtureBuildError::from_string(format!(
                "PCA9548 address {:#04x} is not a valid 7-bit i2c address.",
                address
            )));
        }
        Ok(Self {
            i2c,
            address,
            channel_mask: ChannelMask::closed(),
            pins,
            reset_settle_ms: config.reset_settle_ms,
        })
    }

    ///Applies the pin configuration: drives each wired address-select pin to
    /// match its bit of `address - 0x70`, then pulses the reset line (if
    /// wired) low and back high so the chip starts with all channels closed.
    ///
    /// Safe to call again; it re-applies the same levels and issues a
    /// redundant reset pulse.
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DeviceError> {
        let offset = self.address.wrapping_sub(ADDRESS_RANGE_MIN);
        for (bit, pin) in self.pins.addr.iter_mut().enumerate() {
            if let Some(pin) = pin {
                if offset & (1 << bit) != 0 {
                    pin.set_high().map_err(DeviceError::pin)?;
                } else {
                    pin.set_low().map_err(DeviceError::pin)?;
                }
            }
        }
        if let Some(reset) = self.pins.reset.as_mut() {
            reset.set_low().map_err(DeviceError::pin)?;
            delay.delay_ms(self.reset_settle_ms);
            reset.set_high().map_err(DeviceError::pin)?;
            delay.delay_ms(self.reset_settle_ms);
            debug!("pca9548 {:#04x}: reset pulse complete", self.address);
        }
        Ok(())
    }

    //every mask mutation goes through here so the in-memory value and the
    //register write always stay paired
    fn apply_mask(&mut self, mask: ChannelMask) -> Result<(), DeviceError> {
        self.channel_mask = mask;
        debug!(
            "pca9548 {:#04x}: writing channel mask {:#010b}",
            self.address,
            mask.bits()
        );
        self.i2c
            .write(self.address, &[mask.bits()])
            .map_err(DeviceError::bus)
    }

    ///Enables downstream channel `channel` (0-7), leaving the others as
    /// they are.
    pub fn open_channel(&mut self, channel: u8) -> Result<(), DeviceError> {
        let mask = self.channel_mask.with_open(channel)?;
        self.apply_mask(mask)
    }

    ///Disables downstream channel `channel` (0-7).
    pub fn close_channel(&mut self, channel: u8) -> Result<(), DeviceError> {
        let mask = self.channel_mask.with_closed(channel)?;
        self.apply_mask(mask)
    }

    pub fn open_all(&mut self) -> Result<(), DeviceError> {
        self.apply_mask(ChannelMask::all_open())
    }

    pub fn close_all(&mut self) -> Result<(), DeviceError> {
        self.apply_mask(ChannelMask::closed())
    }

    ///Writes an arbitrary register value, bypassing channel bookkeeping.
    /// Useful to bulk-restore a mask previously saved with `channel_mask`.
    pub fn write_register(&mut self, value: u8) -> Result<(), DeviceError> {
        self.apply_mask(ChannelMask::from_bits(value))
    }

    ///Reads the control register back from the chip. Does not touch the
    /// in-memory mask.
    pub fn read_register(&mut self) -> Result<u8, DeviceError> {
        let mut buffer = [0u8; 1];
        self.i2c
            .read(self.address, &mut buffer)
            .map_err(DeviceError::bus)?;
        Ok(buffer[0])
    }

    ///The last register value this driver attempted to write.
    pub fn channel_mask(&self) -> ChannelMask {
        self.channel_mask
    }

    ///Releases the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
