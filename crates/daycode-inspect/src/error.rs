//! Inspect tool error types.

use std::fmt;

use daycode_crypto::DayCodeError;

/// Errors that can occur while inspecting day codes.
#[derive(Debug)]
pub enum InspectError {
    /// Configuration error (invalid horizon, bad day count, etc.).
    ///
    /// Fatal. Fix the arguments and rerun.
    Config(String),

    /// The shared secret could not be decoded.
    Secret(String),

    /// Day code derivation or lookup failed.
    ///
    /// Wraps errors from the derivation engine. See `DayCodeError` for
    /// details.
    DayCode(DayCodeError),

    /// Writing the report failed.
    Output(String),
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Secret(msg) => write!(f, "invalid secret: {msg}"),
            Self::DayCode(err) => write!(f, "day code error: {err}"),
            Self::Output(msg) => write!(f, "output error: {msg}"),
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DayCode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DayCodeError> for InspectError {
    fn from(err: DayCodeError) -> Self {
        Self::DayCode(err)
    }
}

impl From<hex::FromHexError> for InspectError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Secret(err.to_string())
    }
}

impl From<std::io::Error> for InspectError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}
