//! Loading of key material from byte streams.
//!
//! Two cooperating pieces form the loading surface: [`StreamReader`], which
//! exclusively owns an input stream and drains it into memory, and
//! [`KeyPairReader`], which decodes the drained bytes per [`Format`] and
//! delegates reconstruction to the `keypair` crate.
//!
//! The load pipeline is:
//! ```text
//! stream → Vec<u8> → (identity | base64 decode) → KeyPair::from_bytes
//! ```
//!
//! Exactly one decode step runs before reconstruction, so reconstruction
//! never sees base64 text.
//!
//! # Example
//!
//! ```no_run
//! use keyio::{Format, KeyPairReader};
//! use keypair::KeyRole;
//!
//! # fn main() -> keyio::Result<()> {
//! let mut reader = KeyPairReader::open("private.key")?;
//! let key = reader.read_private()?;
//! assert_eq!(KeyRole::Private, key.role());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
mod format;
mod stream;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};
use keypair::{KeyPair, KeyRole};

pub use error::{Error, Result};
pub use format::Format;
pub use stream::StreamReader;

/// Reads one half of a key pair from a byte stream.
///
/// Construct it over an open stream, a file, or a path, then call one of
/// the `read_*` methods. The reader performs no I/O of its own beyond
/// draining the stream; decoding and reconstruction are pure.
pub struct KeyPairReader<R: Read> {
    stream: StreamReader<R>,
}

impl KeyPairReader<File> {
    /// Open `path` and wrap it. A missing file fails here with
    /// [`Error::StreamUnavailable`], before any read is attempted.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(KeyPairReader {
            stream: StreamReader::open(path)?,
        })
    }

    pub fn from_file(file: File) -> Self {
        Self::new(file)
    }
}

impl<R: Read> KeyPairReader<R> {
    pub fn new(reader: R) -> Self {
        KeyPairReader {
            stream: StreamReader::new(reader),
        }
    }

    /// Read a public key in the default binary format.
    pub fn read_public(&mut self) -> Result<KeyPair> {
        self.read(Format::Binary, KeyRole::Public)
    }

    /// Read a private key in the default binary format.
    pub fn read_private(&mut self) -> Result<KeyPair> {
        self.read(Format::Binary, KeyRole::Private)
    }

    /// Drain the stream, decode per `format`, and reconstruct a key of
    /// `role`.
    ///
    /// # Errors
    ///
    /// [`Error::StreamUnavailable`] on I/O failure,
    /// [`Error::Base64Decode`] on malformed base64 under
    /// [`Format::Base64`], and [`Error::KeyPair`] when reconstruction
    /// rejects the decoded bytes.
    pub fn read(&mut self, format: Format, role: KeyRole) -> Result<KeyPair> {
        let raw = self.stream.drain()?;
        let decoded = match format {
            Format::Binary => raw,
            Format::Base64 => decode_base64(&raw)?,
        };
        Ok(KeyPair::from_bytes(&decoded, role)?)
    }

    /// Release the underlying stream. Safe to call repeatedly; dropping the
    /// reader has the same effect.
    pub fn release(&mut self) {
        self.stream.release();
    }
}

fn decode_base64(raw: &[u8]) -> Result<Vec<u8>> {
    // Strict: any byte outside the standard alphabet, including
    // whitespace, is a decode error.
    STANDARD.decode(raw).map_err(Error::Base64Decode)
}
