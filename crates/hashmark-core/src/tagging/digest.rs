//! Streaming content digest

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::base36;

/// Bytes read per chunk when hashing a file
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Digest of a file's bytes, independent of its name or metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(Vec<u8>);

impl ContentDigest {
    /// Wrap raw digest bytes (big-endian)
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Hash everything `reader` yields with SHA-256, `chunk_size` bytes at a time
    ///
    /// # Errors
    /// Returns an error if reading fails.
    pub fn of_reader<R: Read>(reader: R, chunk_size: usize) -> io::Result<Self> {
        Self::of_reader_with::<Sha256, R>(reader, chunk_size)
    }

    /// Hash everything `reader` yields with the digest `D`
    ///
    /// # Errors
    /// Returns an error if reading fails.
    pub fn of_reader_with<D: Digest, R: Read>(mut reader: R, chunk_size: usize) -> io::Result<Self> {
        let mut hasher = D::new();
        let mut buf = vec![0u8; chunk_size.max(1)];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buf[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(Self(hasher.finalize().to_vec()))
    }

    /// Hash the contents of the file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn of_file(path: &Path, chunk_size: usize) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::of_reader(file, chunk_size)
    }

    /// Raw digest bytes, most significant first
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether the digest reads as the integer zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Full base-36 form without padding
    #[must_use]
    pub fn to_base36(&self) -> String {
        base36::encode(&self.0)
    }

    /// Base-36 form at exactly `width` symbols
    #[must_use]
    pub fn encode(&self, width: usize) -> String {
        base36::encode_fixed(&self.0, width)
    }
}
