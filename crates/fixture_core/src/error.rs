//!A mod for the error types
use std::fmt::Debug;

///Common error type when building devices from configuration.
pub enum FixtureBuildError {
    Message(String),
    Messages(Vec<String>),
}

impl FixtureBuildError {
    pub fn from_string(msg: String) -> Self {
        FixtureBuildError::Message(msg)
    }
    pub fn from_errs(errs: Vec<FixtureBuildError>) -> Self {
        let mut messages = Vec::with_capacity(errs.len());
        for err in errs {
            match err {
                Self::Message(msg) => messages.push(msg),
                Self::Messages(mut msgs) => messages.append(&mut msgs),
            }
        }
        Self::Messages(messages)
    }
    pub fn message(msg: &str) -> Self {
        FixtureBuildError::Message(msg.to_string())
    }
    pub fn messages(msgs: &[String]) -> Self {
        FixtureBuildError::Messages(Vec::from(msgs).iter().map(|ptr| ptr.to_string()).collect())
    }
}

impl Debug for FixtureBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => f.write_fmt(format_args!("FixtureBuildError: {}", message)),
            Self::Messages(messages) => f.write_fmt(format_args!(
                "FixtureBuildError (multiple): \n{}",
                messages.join("\n")
            )),
        }
    }
}

///Error returned when a caller asks for a multiplexer channel outside 0-7.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InvalidChannel(pub u8);

impl Debug for InvalidChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "InvalidChannel: channel {} is out of range 0-7",
            self.0
        ))
    }
}

impl From<InvalidChannel> for FixtureBuildError {
    fn from(err: InvalidChannel) -> Self {
        FixtureBuildError::from_string(format!("{:?}", err))
    }
}
