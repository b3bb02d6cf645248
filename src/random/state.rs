//! Automaton state: a 256-bit ring stored as four 64-bit words.

use crate::error::Ring30Error;
use crate::utils::converter;

/// Number of words in the ring.
pub const WORDS: usize = 4;

/// Size of one word in bytes.
pub const WORD_BYTES: usize = 8;

/// Size of the whole ring in bytes.
pub const STATE_BYTES: usize = WORDS * WORD_BYTES;

/// Constants XORed into the seed for words 1..=3 (golden-ratio multiples).
const SEED_SPREAD: [u64; WORDS - 1] = [
    0x9e37_79b9_7f4a_7c15,
    0x3c6e_f372_fe94_f82a,
    0x78dd_e6e5_fd29_f054,
];

/// One generation of the cellular automaton.
///
/// The ring is read left to right: word 0, word 1, word 2, word 3 and back
/// to word 0, with bit 63 the leftmost cell of each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    words: [u64; WORDS],
}

impl State {
    /// Builds the initial ring for `seed`.
    ///
    /// Word 0 holds the raw seed and words 1..=3 hold the seed XORed with
    /// fixed spreading constants. Every seed, including 0, is valid.
    pub fn from_seed(seed: u64) -> Self {
        State {
            words: [
                seed,
                seed ^ SEED_SPREAD[0],
                seed ^ SEED_SPREAD[1],
                seed ^ SEED_SPREAD[2],
            ],
        }
    }

    /// Wraps an explicit word array.
    pub const fn from_words(words: [u64; WORDS]) -> Self {
        State { words }
    }

    /// Returns a copy of the word array.
    pub const fn words(&self) -> [u64; WORDS] {
        self.words
    }

    /// Returns word `index`. Callers keep `index < WORDS`.
    #[inline(always)]
    pub(crate) fn word(&self, index: usize) -> u64 {
        self.words[index]
    }

    /// Serializes the ring as 32 little-endian bytes, word 0 first.
    pub fn to_le_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        for (chunk, word) in out.chunks_exact_mut(WORD_BYTES).zip(self.words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Restores a ring from the layout produced by [`to_le_bytes`](Self::to_le_bytes).
    ///
    /// # Errors
    /// Returns [`Ring30Error::InvalidStateLength`] unless `bytes` is exactly
    /// 32 bytes long.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, Ring30Error> {
        if bytes.len() != STATE_BYTES {
            return Err(Ring30Error::InvalidStateLength(bytes.len()));
        }
        let decoded = converter::le_bytes_to_words(bytes)
            .ok_or(Ring30Error::InvalidStateLength(bytes.len()))?;
        let mut words = [0u64; WORDS];
        words.copy_from_slice(&decoded);
        Ok(State { words })
    }
}
