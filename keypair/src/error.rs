use thiserror::Error;

use crate::KeyRole;

/// Errors that can occur when reconstructing a key from an envelope.
///
/// Every variant except [`Error::UnsupportedAlgorithm`] means the envelope
/// bytes are malformed for the requested role.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No NUL terminator after the algorithm identifier
    #[error("missing algorithm identifier terminator")]
    MissingAlgorithmTerminator,

    /// The algorithm identifier bytes are not valid UTF-8
    #[error("algorithm identifier is not valid UTF-8")]
    InvalidAlgorithmIdentifier,

    /// The algorithm identifier is empty
    #[error("empty algorithm identifier")]
    EmptyAlgorithmIdentifier,

    /// The algorithm identifier is not in the recognized set
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The envelope ends before the role tag
    #[error("missing key role tag")]
    MissingRoleTag,

    /// The role tag byte is neither the public nor the private tag
    #[error("unknown key role tag: {0:#04x}")]
    UnknownRoleTag(u8),

    /// The envelope encodes the other half of the key pair
    #[error("expected a {expected} key, envelope encodes a {actual} key")]
    RoleMismatch { expected: KeyRole, actual: KeyRole },

    /// No key material after the role tag
    #[error("empty key material")]
    EmptyKeyMaterial,
}

pub type Result<T> = std::result::Result<T, Error>;
