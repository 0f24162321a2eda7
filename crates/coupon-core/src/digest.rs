//! Digest stream: a seed hashed into a finite run of symbol indices.
//!
//! Block 0 is `SHA-1(seed)`. Every later block is
//! `SHA-1(previous_block || seed)`, so a stream can be extended
//! deterministically up to a fixed number of blocks. Each digest byte,
//! reduced modulo the alphabet size, is one symbol index.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::alphabet::ALPHABET_SIZE;

/// Bytes produced by one SHA-1 invocation.
pub const BLOCK_LEN: usize = 20;

/// Default number of blocks a stream may draw before it is exhausted.
pub const DEFAULT_MAX_BLOCKS: usize = 8;

/// Where a digest stream gets its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seed {
    /// Deterministic: the same text always yields the same stream.
    Text(String),
    /// Fresh seed from the clock and the thread RNG.
    Random,
}

impl Seed {
    /// Build a seed from optional text. Empty text means random.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Seed::Random
        } else {
            Seed::Text(text)
        }
    }

    /// Whether this seed produces the same stream every time.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Seed::Text(_))
    }

    /// The concrete bytes fed to the hash.
    ///
    /// `Random` draws a new value on every call.
    pub fn resolve(&self) -> String {
        match self {
            Seed::Text(text) => text.clone(),
            Seed::Random => random_seed_text(),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Random
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::from_text(text)
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::from_text(text)
    }
}

impl From<Option<String>> for Seed {
    fn from(text: Option<String>) -> Self {
        text.map_or(Seed::Random, Seed::from_text)
    }
}

fn random_seed_text() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let salt: i64 = rand::thread_rng().gen_range(0..i64::MAX);
    format!("{}{}", secs, salt)
}

/// A finite, restartable sequence of symbol indices derived from a seed.
#[derive(Clone)]
pub struct DigestStream {
    seed: Vec<u8>,
    block: [u8; BLOCK_LEN],
    block_index: usize,
    offset: usize,
    max_blocks: usize,
    consumed: usize,
}

impl DigestStream {
    /// Create a stream over `seed` that may draw at most `max_blocks` blocks.
    ///
    /// A `max_blocks` of zero is treated as one.
    pub fn new(seed: impl AsRef<[u8]>, max_blocks: usize) -> Self {
        let seed = seed.as_ref().to_vec();
        let block = first_block(&seed);
        Self {
            seed,
            block,
            block_index: 0,
            offset: 0,
            max_blocks: max_blocks.max(1),
            consumed: 0,
        }
    }

    /// Create a stream with the default block limit.
    pub fn from_seed(seed: impl AsRef<[u8]>) -> Self {
        Self::new(seed, DEFAULT_MAX_BLOCKS)
    }

    /// Total number of indices this stream can yield, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        self.max_blocks.saturating_mul(BLOCK_LEN)
    }

    /// Number of indices already consumed.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of indices left before exhaustion.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.consumed
    }

    /// Whether the stream has no indices left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Pull the next symbol index, or `None` once the stream is exhausted.
    pub fn next_index(&mut self) -> Option<u8> {
        if self.offset == BLOCK_LEN {
            if self.block_index + 1 >= self.max_blocks {
                return None;
            }
            self.block = next_block(&self.block, &self.seed);
            self.block_index += 1;
            self.offset = 0;
        }
        let byte = self.block[self.offset];
        self.offset += 1;
        self.consumed += 1;
        Some(byte % ALPHABET_SIZE as u8)
    }

    /// Pull three indices for one candidate part.
    ///
    /// Returns `None` without consuming anything if fewer than three remain.
    pub fn next_triple(&mut self) -> Option<[u8; 3]> {
        if self.remaining() < 3 {
            return None;
        }
        Some([self.next_index()?, self.next_index()?, self.next_index()?])
    }

    /// Rewind to the first index of block 0.
    pub fn restart(&mut self) {
        self.block = first_block(&self.seed);
        self.block_index = 0;
        self.offset = 0;
        self.consumed = 0;
    }
}

impl Iterator for DigestStream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_index()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl fmt::Debug for DigestStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DigestStream(block {} {}.., {}/{})",
            self.block_index,
            &hex::encode(self.block)[..8],
            self.consumed,
            self.capacity()
        )
    }
}

fn first_block(seed: &[u8]) -> [u8; BLOCK_LEN] {
    Sha1::digest(seed).into()
}

fn next_block(previous: &[u8; BLOCK_LEN], seed: &[u8]) -> [u8; BLOCK_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(previous);
    hasher.update(seed);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_block_indices() {
        // sha1("test0") = 9b4bf5cdb7381fe38284a05d44d0631cf253c095
        let stream = DigestStream::new("test0", 1);
        let indices: Vec<u8> = stream.collect();
        assert_eq!(
            indices,
            vec![27, 11, 21, 13, 23, 24, 31, 3, 2, 4, 0, 29, 4, 16, 3, 28, 18, 19, 0, 21]
        );
    }

    #[test]
    fn test_deterministic() {
        let a: Vec<u8> = DigestStream::from_seed("hello").collect();
        let b: Vec<u8> = DigestStream::from_seed("hello").collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_MAX_BLOCKS * BLOCK_LEN);
    }

    #[test]
    fn test_blocks_differ() {
        let indices: Vec<u8> = DigestStream::new("hello", 2).collect();
        assert_ne!(indices[..BLOCK_LEN], indices[BLOCK_LEN..]);
    }

    #[test]
    fn test_extension_keeps_prefix() {
        let short: Vec<u8> = DigestStream::new("coupon", 1).collect();
        let long: Vec<u8> = DigestStream::new("coupon", 4).collect();
        assert_eq!(short[..], long[..BLOCK_LEN]);
    }

    #[test]
    fn test_indices_in_range() {
        assert!(DigestStream::from_seed("range").all(|i| (i as usize) < ALPHABET_SIZE));
    }

    #[test]
    fn test_triple_exhaustion() {
        let mut stream = DigestStream::new("test0", 1);
        for _ in 0..6 {
            assert!(stream.next_triple().is_some());
        }
        assert_eq!(stream.remaining(), 2);
        assert_eq!(stream.next_triple(), None);
        // A failed triple consumes nothing.
        assert_eq!(stream.remaining(), 2);
        assert!(stream.next_index().is_some());
        assert!(stream.next_index().is_some());
        assert!(stream.is_exhausted());
        assert_eq!(stream.next_index(), None);
    }

    #[test]
    fn test_triples_cross_block_boundary() {
        let flat: Vec<u8> = DigestStream::new("seed", 2).collect();
        let mut stream = DigestStream::new("seed", 2);
        let mut triples = Vec::new();
        while let Some(t) = stream.next_triple() {
            triples.extend_from_slice(&t);
        }
        assert_eq!(triples.len(), 39);
        assert_eq!(triples[..], flat[..39]);
    }

    #[test]
    fn test_restart() {
        let mut stream = DigestStream::new("restart", 3);
        let first: Vec<u8> = stream.by_ref().take(45).collect();
        stream.restart();
        assert_eq!(stream.consumed(), 0);
        let again: Vec<u8> = stream.by_ref().take(45).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_zero_blocks_is_one() {
        assert_eq!(DigestStream::new("x", 0).capacity(), BLOCK_LEN);
    }

    #[test]
    fn test_huge_block_limit_saturates() {
        let mut stream = DigestStream::new("test0", usize::MAX);
        assert_eq!(stream.capacity(), usize::MAX);
        assert!(!stream.is_exhausted());
        assert_eq!(stream.next_triple(), Some([27, 11, 21]));
        assert_eq!(stream.remaining(), usize::MAX - 3);
    }

    #[test]
    fn test_seed_from_text() {
        assert_eq!(Seed::from_text(""), Seed::Random);
        assert_eq!(Seed::from("abc"), Seed::Text("abc".into()));
        assert_eq!(Seed::from(None::<String>), Seed::Random);
        assert!(Seed::from("abc").is_deterministic());
        assert_eq!(Seed::from("abc").resolve(), "abc");
    }

    #[test]
    fn test_random_seed_is_numeric() {
        let text = Seed::Random.resolve();
        assert!(!text.is_empty());
        assert!(text.bytes().all(|b| b.is_ascii_digit()));
    }
}
