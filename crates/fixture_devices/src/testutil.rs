//!Test doubles implementing the `embedded-hal` traits, shared by the device
//! tests. `FakeI2c` records every write transaction and plays back scripted
//! read payloads; a scripted payload shorter than the requested buffer acts
//! like a device that stopped answering mid-read.

use core::convert::Infallible;
use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, ErrorKind, Operation};

#[derive(Debug)]
pub struct FakeBusError;

impl i2c::Error for FakeBusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct FakeI2c {
    writes: Vec<(u8, Vec<u8>)>,
    reads: VecDeque<Vec<u8>>,
    fail_next_read: bool,
    fail_writes: bool,
}

impl FakeI2c {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            reads: VecDeque::new(),
            fail_next_read: false,
            fail_writes: false,
        }
    }

    ///Queues the payload the next read transaction will return.
    pub fn push_read(&mut self, data: Vec<u8>) {
        self.reads.push_back(data);
    }

    pub fn fail_next_read(&mut self) {
        self.fail_next_read = true;
    }

    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    ///Every write transaction seen so far, as (address, bytes) pairs.
    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.writes.clone()
    }
}

impl i2c::ErrorType for FakeI2c {
    type Error = FakeBusError;
}

impl i2c::I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    if self.fail_writes {
                        return Err(FakeBusError);
                    }
                    self.writes.push((address, bytes.to_vec()));
                }
                Operation::Read(buffer) => {
                    if self.fail_next_read {
                        self.fail_next_read = false;
                        return Err(FakeBusError);
                    }
                    match self.reads.pop_front() {
                        Some(data) if data.len() >= buffer.len() => {
                            buffer.copy_from_slice(&data[..buffer.len()]);
                        }
                        Some(data) => {
                            //short read: hand over what arrived, then fail,
                            //like a device that stopped acking
                            buffer[..data.len()].copy_from_slice(&data);
                            return Err(FakeBusError);
                        }
                        None => return Err(FakeBusError),
                    }
                }
            }
        }
        Ok(())
    }
}

///Records every level driven onto it.
pub struct FakePin {
    levels: Vec<bool>,
}

impl FakePin {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    pub fn levels(&self) -> Vec<bool> {
        self.levels.clone()
    }
}

impl digital::ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

///Delay that returns immediately; the settle times are irrelevant in tests.
pub struct FakeDelay;

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
