use fixture_core::error::FixtureBuildError;
use fixture_devices::devices::{mmr920::Mmr920DeviceConfig, pca9548::Pca9548DeviceConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct Metadata {
    pub name: Option<String>,
    pub description: Option<String>,
}

///The multiplexer section: the device config plus the BCM pin numbers its
/// optional reset and address-select lines are wired to.
#[derive(Debug, Deserialize)]
pub struct MuxConfig {
    pub device: Pca9548DeviceConfig,
    pub reset_pin: Option<u8>,
    pub addr_pins: [Option<u8>; 3],
}

#[derive(Debug, Deserialize)]
pub struct SensorConfig {
    pub device: Mmr920DeviceConfig,
}

///What the bring-up check should exercise: which multiplexer channel the
/// sensor sits behind, how long to let the sensor settle after reset, and
/// how many raw register bytes to dump.
#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    pub channel: u8,
    pub sensor_settle_ms: u64,
    pub read_len: usize,
}

#[derive(Debug, Deserialize)]
pub struct FixtureConfig {
    #[serde(default)]
    pub metadata: Metadata,
    pub i2c_bus: u8,
    pub mux: MuxConfig,
    pub sensor: SensorConfig,
    pub check: CheckConfig,
}

#[cfg(feature = "rpi")]
fn output_pin(
    pin: Option<u8>,
) -> Result<Option<fixture_rpi_gpio::rppal::gpio::OutputPin>, FixtureBuildError> {
    match pin {
        Some(pin) => Ok(Some(fixture_rpi_gpio::get_output_pin(pin)?)),
        None => Ok(None),
    }
}

impl FixtureConfig {
    ///Builds the devices against the real bus and runs one pass: apply the
    /// multiplexer pin configuration, open the configured channel, reset the
    /// sensor and dump its registers.
    #[cfg(feature = "rpi")]
    pub fn run_check(&self) -> Result<(), FixtureBuildError> {
        use fixture_devices::devices::mmr920::Mmr920Device;
        use fixture_devices::devices::pca9548::{Pca9548Device, Pca9548Pins};
        use fixture_rpi_gpio::{get_bus, Delay};
        use tracing::{info, warn};

        let pins = Pca9548Pins {
            reset: output_pin(self.mux.reset_pin)?,
            addr: [
                output_pin(self.mux.addr_pins[0])?,
                output_pin(self.mux.addr_pins[1])?,
                output_pin(self.mux.addr_pins[2])?,
            ],
        };

        let mut mux = Pca9548Device::build(&self.mux.device, get_bus(self.i2c_bus)?, pins)?;
        let mut delay = Delay::new();
        mux.begin(&mut delay)?;
        mux.open_channel(self.check.channel)?;
        info!(
            "multiplexer channel mask is {:#010b}",
            mux.channel_mask().bits()
        );

        let mut sensor = Mmr920Device::build(&self.sensor.device, get_bus(self.i2c_bus)?)?;
        sensor.reset()?;
        std::thread::sleep(std::time::Duration::from_millis(self.check.sensor_settle_ms));

        let mut buffer = vec![0u8; self.check.read_len];
        sensor.read_registers(&mut buffer)?;
        if buffer.iter().all(|byte| *byte == 0) {
            warn!("sensor returned all zeros. it may not be responding on this channel.");
        }
        info!("sensor registers: {:02x?}", buffer);
        Ok(())
    }

    #[cfg(not(feature = "rpi"))]
    pub fn run_check(&self) -> Result<(), FixtureBuildError> {
        Err(FixtureBuildError::message(
            "fixture was built without rpi support. Rebuild with --features rpi to access hardware.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::FixtureConfig;
    use config_rs::{Config, File, FileFormat};

    const EXAMPLE: &str = "
metadata:
  name: leak-test-rig
i2c_bus: 1
mux:
  device:
    i2c_address: 115
    reset_settle_ms: 10
  reset_pin: 17
  addr_pins: [27, 22, null]
sensor:
  device:
    i2c_address: 103
check:
  channel: 5
  sensor_settle_ms: 15
  read_len: 4
";

    #[test]
    fn test_parse_example_config() {
        let config: FixtureConfig = Config::builder()
            .add_source(File::from_str(EXAMPLE, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.metadata.name.as_deref(), Some("leak-test-rig"));
        assert_eq!(config.mux.device.i2c_address, 0x73);
        assert_eq!(config.mux.reset_pin, Some(17));
        assert_eq!(config.mux.addr_pins, [Some(27), Some(22), None]);
        assert_eq!(config.sensor.device.i2c_address, 0x67);
        assert_eq!(config.check.channel, 5);
        assert_eq!(config.check.read_len, 4);
    }
}
