//! Content hashing for remote lookups by hash.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read size for streaming hashes. Keeps memory flat for multi-GB files.
const CHUNK_SIZE: usize = 4096;

/// Computes the SHA-256 digests that the lookup endpoint is keyed by.
pub struct Hasher;

impl Hasher {
    /// Generate a SHA-256 hash of file contents as lowercase hex.
    ///
    /// Streams the file in fixed-size chunks rather than loading it into memory.
    pub fn content_hash(path: &Path) -> std::io::Result<String> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();

        let mut buffer = [0u8; CHUNK_SIZE];
        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Generate a SHA-256 hash from an in-memory byte buffer.
    pub fn content_hash_from_bytes(data: &[u8]) -> String {
        format!("{:x}", Sha256::digest(data))
    }
}
