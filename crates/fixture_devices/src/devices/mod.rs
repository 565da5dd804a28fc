///The PCA9548 is an i2c bus multiplexer from TI/NXP with 8 selectable
/// downstream channels controlled through a one-byte register.
#[cfg(feature = "pca9548")]
pub mod pca9548;

///The MMR920 is an i2c piezo-resistive pressure/temperature sensor from
/// Mitsumi, driven through single-byte commands and raw register reads.
#[cfg(feature = "mmr920")]
pub mod mmr920;
