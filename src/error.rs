//! Library error type.
//!
//! Every fallible operation in the crate returns this enum; malformed
//! input never panics.

use thiserror::Error;

/// Errors produced by parsing and summarization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed address text, prefix, or punctuation.
    #[error("invalid address format: '{input}'")]
    InvalidFormat {
        /// The offending input text.
        input: String,
    },

    /// An octet, hextet, or prefix length outside its legal bounds.
    #[error("value out of range in '{input}'")]
    OutOfRange {
        /// The offending input text.
        input: String,
    },

    /// [`summarize`](crate::summarize) called with both IPv4 and IPv6
    /// networks in one batch. Callers must partition by family first.
    #[error("cannot summarize IPv4 and IPv6 networks in one call")]
    MixedFamily,
}

impl Error {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Error::InvalidFormat {
            input: input.to_string(),
        }
    }

    pub(crate) fn out_of_range(input: &str) -> Self {
        Error::OutOfRange {
            input: input.to_string(),
        }
    }
}
