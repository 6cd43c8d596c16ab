//! Access key generation
//!
//! Generates fixed-length keys drawn uniformly from the key alphabet.

use rand::Rng;

use crate::domain::access_key::{KEY_ALPHABET, KEY_LENGTH};

/// Generator for access key values
///
/// Each character is drawn independently from a thread-local RNG seeded by
/// the operating system. Keys are not meant to be cryptographic secrets.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    length: usize,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self { length: KEY_LENGTH }
    }

    /// Generate a new key value
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();

        (0..self.length)
            .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}
