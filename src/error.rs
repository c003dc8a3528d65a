//! Error type shared by the conversion, boolean algebra and networking modules.

use thiserror::Error;

/// Failure raised by any calckit operation.
///
/// Every operation in the crate is a pure computation, so the same input
/// always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input text: a boolean expression or a digit string.
    #[error("parse error in '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// Malformed IPv4 address, out-of-range octet or prefix.
    #[error("invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    /// A boolean expression referenced a variable missing from the environment.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// A value, radix, prefix length or count outside the supported range.
    #[error("out of range: {0}")]
    Range(String),
}

/// Result type for calckit operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_address(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn range(reason: impl Into<String>) -> Self {
        Error::Range(reason.into())
    }
}
