//!This is the core library for the fixture project. The device and hardware crates depend on this one. It holds the shared error types and the channel mask arithmetic used by the bus multiplexer.

pub mod error;
pub mod mask;

pub use mask::ChannelMask;
