//!Channel mask arithmetic for the 8-channel bus multiplexer.
//!
//! Bit *n* of the mask corresponds to downstream channel *n*, so channel 0
//! is 0x01 and channel 7 is 0x80. All operations validate the channel index
//! before shifting.

use crate::error::InvalidChannel;
use serde::{Deserialize, Serialize};

///The state of the multiplexer's one-byte control register. Each set bit
/// enables one downstream channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelMask(u8);

///How many downstream channels the multiplexer has.
pub const CHANNEL_COUNT: u8 = 8;

impl ChannelMask {
    ///All channels disconnected.
    pub const fn closed() -> Self {
        ChannelMask(0x00)
    }

    ///All channels enabled.
    pub const fn all_open() -> Self {
        ChannelMask(0xFF)
    }

    pub const fn from_bits(bits: u8) -> Self {
        ChannelMask(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    fn channel_bit(channel: u8) -> Result<u8, InvalidChannel> {
        if channel < CHANNEL_COUNT {
            Ok(1 << channel)
        } else {
            Err(InvalidChannel(channel))
        }
    }

    ///Returns a mask with the given channel's bit set.
    pub fn with_open(self, channel: u8) -> Result<Self, InvalidChannel> {
        Ok(ChannelMask(self.0 | Self::channel_bit(channel)?))
    }

    ///Returns a mask with the given channel's bit cleared.
    pub fn with_closed(self, channel: u8) -> Result<Self, InvalidChannel> {
        Ok(ChannelMask(self.0 & !Self::channel_bit(channel)?))
    }

    ///True if the channel bit is set. Out-of-range channels are never open.
    pub fn is_open(self, channel: u8) -> bool {
        match Self::channel_bit(channel) {
            Ok(bit) => self.0 & bit != 0,
            Err(_) => false,
        }
    }
}

impl Default for ChannelMask {
    fn default() -> Self {
        ChannelMask::closed()
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelMask;
    use crate::error::InvalidChannel;

    #[test]
    fn test_single_channel_bit_mapping() {
        //channel n maps to bit n
        let mask = ChannelMask::closed().with_open(5).unwrap();
        assert_eq!(mask.bits(), 0x20);
        let mask = ChannelMask::closed().with_open(0).unwrap();
        assert_eq!(mask.bits(), 0x01);
        let mask = ChannelMask::closed().with_open(7).unwrap();
        assert_eq!(mask.bits(), 0x80);
    }

    #[test]
    fn test_open_close_round_trip() {
        let mask = ChannelMask::all_open().with_closed(3).unwrap();
        assert_eq!(mask.bits(), 0xF7);
        let mask = mask.with_open(3).unwrap();
        assert_eq!(mask, ChannelMask::all_open());
    }

    #[test]
    fn test_idempotence() {
        let once = ChannelMask::closed().with_open(2).unwrap();
        let twice = once.with_open(2).unwrap();
        assert_eq!(once, twice);

        //closing an already-closed channel is a no-op
        let still = ChannelMask::closed().with_closed(2).unwrap();
        assert_eq!(still, ChannelMask::closed());
    }

    #[test]
    fn test_out_of_range_channel_rejected() {
        assert_eq!(
            ChannelMask::closed().with_open(8).unwrap_err(),
            InvalidChannel(8)
        );
        assert_eq!(
            ChannelMask::all_open().with_closed(255).unwrap_err(),
            InvalidChannel(255)
        );
        assert!(!ChannelMask::all_open().is_open(8));
    }

    #[test]
    fn test_is_open() {
        let mask = ChannelMask::from_bits(0x41);
        assert!(mask.is_open(0));
        assert!(mask.is_open(6));
        assert!(!mask.is_open(1));
    }
}
