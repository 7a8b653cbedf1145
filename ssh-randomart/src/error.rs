//! Error types

use core::fmt;

/// Result type with `ssh-randomart`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
///
/// Rendering randomart never fails. Errors only arise when parsing
/// fingerprints and hash algorithm identifiers.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Unknown algorithm.
    ///
    /// This is returned when a hash algorithm identifier or fingerprint
    /// prefix is not recognized.
    AlgorithmUnknown,

    /// Base64-related errors.
    Base64(base64ct::Error),

    /// Digest length does not match the hash algorithm.
    Length,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlgorithmUnknown => write!(f, "unknown algorithm"),
            Error::Base64(err) => write!(f, "Base64 encoding error: {err}"),
            Error::Length => write!(f, "length invalid"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Base64(err) => Some(err),
            _ => None,
        }
    }
}

impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Error {
        Error::Base64(err)
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Length
    }
}
