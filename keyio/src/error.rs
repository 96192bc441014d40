use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when loading key material from a stream.
///
/// Reconstruction failures from the `keypair` crate pass through unchanged
/// so callers can tell a malformed envelope apart from a malformed stream.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying stream could not be opened, or an I/O error occurred mid-read
    #[error("stream unavailable: {0}")]
    StreamUnavailable(#[from] std::io::Error),

    /// Base64 payload malformed; only possible under the base64 format
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),

    /// Format name outside the recognized set; never silently defaulted
    #[error("key format {0} is unknown")]
    UnsupportedFormat(String),

    /// Reconstruction failure, passed through unmasked
    #[error(transparent)]
    KeyPair(#[from] keypair::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
