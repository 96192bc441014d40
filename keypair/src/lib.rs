//! Key pair reconstruction from self-describing key envelopes.
//!
//! A key half is stored as an envelope: the algorithm name in UTF-8, a NUL
//! separator, a one-byte role tag, then the algorithm-specific key material.
//!
//! ```text
//! envelope := algorithm-name 0x00 role-tag key-bytes
//! ```
//!
//! [`KeyPair::from_bytes`] parses an envelope back into a typed key and
//! checks that it encodes the requested [`KeyRole`]; [`KeyPair::to_bytes`]
//! re-emits the envelope verbatim.

pub mod error;

use std::fmt::{Display, Formatter};

pub use error::{Error, Result};

const RSA_NAME: &str = "RSA";
const EC_NAME: &str = "EC";
const ED25519_NAME: &str = "Ed25519";

const PUBLIC_TAG: u8 = 0x01;
const PRIVATE_TAG: u8 = 0x02;

/// Which half of a key pair a byte sequence should be reconstructed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Public,
    Private,
}

impl KeyRole {
    fn tag(&self) -> u8 {
        match self {
            KeyRole::Public => PUBLIC_TAG,
            KeyRole::Private => PRIVATE_TAG,
        }
    }

    fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            PUBLIC_TAG => Ok(KeyRole::Public),
            PRIVATE_TAG => Ok(KeyRole::Private),
            _ => Err(Error::UnknownRoleTag(tag)),
        }
    }
}

impl Display for KeyRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyRole::Public => write!(f, "public"),
            KeyRole::Private => write!(f, "private"),
        }
    }
}

/// Key algorithm recognized by the envelope format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// RSA encryption
    Rsa,
    /// Elliptic Curve (ECDSA/ECDH)
    Ec,
    /// Ed25519 (EdDSA)
    Ed25519,
}

impl Algorithm {
    /// Returns the identifier used for this algorithm in the envelope.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Rsa => RSA_NAME,
            Algorithm::Ec => EC_NAME,
            Algorithm::Ed25519 => ED25519_NAME,
        }
    }

    fn lookup(name: &str) -> Result<Self> {
        match name {
            RSA_NAME => Ok(Algorithm::Rsa),
            EC_NAME => Ok(Algorithm::Ec),
            ED25519_NAME => Ok(Algorithm::Ed25519),
            _ => Err(Error::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One reconstructed half of a key pair.
///
/// Opaque to the loading layer: callers hand it to signing or verification
/// code, which interprets the key material per [`Algorithm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    algorithm: Algorithm,
    role: KeyRole,
    key_bytes: Vec<u8>,
}

impl KeyPair {
    pub fn new(algorithm: Algorithm, role: KeyRole, key_bytes: Vec<u8>) -> Self {
        KeyPair {
            algorithm,
            role,
            key_bytes,
        }
    }

    /// Reconstruct a key of the requested role from an envelope.
    ///
    /// The result depends only on `(bytes, role)`; no I/O is performed.
    ///
    /// # Errors
    ///
    /// Returns a malformed-data variant when the envelope is truncated,
    /// carries an unknown role tag, or encodes the other role;
    /// [`Error::UnsupportedAlgorithm`] when the algorithm identifier is not
    /// recognized.
    pub fn from_bytes(bytes: &[u8], role: KeyRole) -> Result<Self> {
        let nul = bytes
            .iter()
            .position(|b| *b == 0x00)
            .ok_or(Error::MissingAlgorithmTerminator)?;
        let name = std::str::from_utf8(&bytes[..nul])
            .map_err(|_| Error::InvalidAlgorithmIdentifier)?;
        if name.is_empty() {
            return Err(Error::EmptyAlgorithmIdentifier);
        }
        let algorithm = Algorithm::lookup(name)?;

        let tag = bytes.get(nul + 1).copied().ok_or(Error::MissingRoleTag)?;
        let actual = KeyRole::from_tag(tag)?;
        if actual != role {
            return Err(Error::RoleMismatch {
                expected: role,
                actual,
            });
        }

        let key_bytes = &bytes[nul + 2..];
        if key_bytes.is_empty() {
            return Err(Error::EmptyKeyMaterial);
        }

        Ok(KeyPair {
            algorithm,
            role,
            key_bytes: key_bytes.to_vec(),
        })
    }

    /// Re-emit the envelope this key was reconstructed from.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.algorithm.name().as_bytes().to_vec();
        bytes.push(0x00);
        bytes.push(self.role.tag());
        bytes.extend_from_slice(&self.key_bytes);
        bytes
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn role(&self) -> KeyRole {
        self.role
    }

    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }
}
