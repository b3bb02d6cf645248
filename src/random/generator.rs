//! Ring30 generator: seeding, word stream and byte stream assembly.
//!
//! The generator walks the four words of the current generation with a
//! cursor, mixing each word as it is handed out. When all four words have
//! been consumed the ring is advanced by one generation. The byte stream is
//! the concatenation of mixed words in little-endian order; a request that
//! ends inside a word keeps the unread tail of that word for the next
//! request, so the bytes produced never depend on how reads are sliced.

use std::fmt;
use std::io;
use std::marker::PhantomData;

use log::debug;

use crate::error::Ring30Error;

use super::evolution;
use super::mix::mix;
use super::rule::{NeighborhoodRule, Plain, Radius1, Radius2, Rotation, StateMix};
use super::state::{State, WORDS, WORD_BYTES};

/// Generations run at construction before any output is produced.
pub const WARMUP_GENERATIONS: usize = 16;

/// Canonical generator: radius-1 Rule 30 without state-time mixing.
pub type Ring30 = Generator<Radius1, Plain>;

/// Wide-diffusion generator: radius-2 rule with rotation state mixing.
pub type Ring30R2 = Generator<Radius2, Rotation>;

/// Deterministic pseudo-random generator driven by a cellular automaton.
///
/// The neighborhood rule `R` and state-time mix `M` are chosen at compile
/// time; everything above the evolution step is shared by all variants.
///
/// A generator is single-owner state. Use one instance per thread.
///
/// # Examples
///
/// ```
/// use ring30::Ring30;
///
/// let mut rng = Ring30::new(12345);
/// let mut buf = [0u8; 16];
/// assert_eq!(rng.fill(&mut buf), 16);
/// ```
pub struct Generator<R = Radius1, M = Plain> {
    state: State,
    cursor: usize,
    leftover: [u8; WORD_BYTES],
    leftover_start: usize,
    _strategy: PhantomData<fn() -> (R, M)>,
}

impl<R: NeighborhoodRule, M: StateMix> Generator<R, M> {
    /// Creates a generator for `seed`.
    ///
    /// The ring is initialized with [`State::from_seed`] and advanced
    /// [`WARMUP_GENERATIONS`] times. Seed 0 is an ordinary seed.
    ///
    /// # Parameters
    /// - `seed`: Any 64-bit value.
    pub fn new(seed: u64) -> Self {
        let mut state = State::from_seed(seed);
        for _ in 0..WARMUP_GENERATIONS {
            state = evolution::step::<R, M>(&state);
        }
        debug!(
            "seeded generator: seed={:#018x} radius={} warmup={}",
            seed,
            R::RADIUS,
            WARMUP_GENERATIONS
        );
        Self::from_parts(state, 0)
    }

    /// Restores a generator from a ring snapshot and word cursor.
    ///
    /// No warm-up is applied. A cursor of 4 means the generation is
    /// exhausted and the next word will advance the ring first. Pending
    /// leftover bytes are not part of a snapshot.
    ///
    /// # Errors
    /// Returns [`Ring30Error::InvalidCursor`] if `cursor > 4`.
    pub fn with_state(state: State, cursor: usize) -> Result<Self, Ring30Error> {
        if cursor > WORDS {
            return Err(Ring30Error::InvalidCursor(cursor));
        }
        debug!("restored generator: cursor={} radius={}", cursor, R::RADIUS);
        Ok(Self::from_parts(state, cursor))
    }

    fn from_parts(state: State, cursor: usize) -> Self {
        Generator {
            state,
            cursor,
            leftover: [0u8; WORD_BYTES],
            leftover_start: WORD_BYTES,
            _strategy: PhantomData,
        }
    }

    /// Returns a copy of the current ring.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns how many words of the current generation were consumed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of bytes held back from the last partial word.
    pub fn pending_bytes(&self) -> usize {
        WORD_BYTES - self.leftover_start
    }

    /// Returns the next mixed word of the stream.
    ///
    /// Pending leftover bytes from a partial [`fill`](Self::fill) are
    /// discarded, so no byte of an earlier word is delivered after this one.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.leftover_start = WORD_BYTES;
        if self.cursor == WORDS {
            self.state = evolution::step::<R, M>(&self.state);
            self.cursor = 0;
        }
        let word = mix(self.state.word(self.cursor));
        self.cursor += 1;
        word
    }

    /// Fills `buf` with the next bytes of the stream.
    ///
    /// Pending bytes from a previous partial word are written first, then
    /// whole words, then the leading bytes of one more word whose tail is
    /// kept for the next call.
    ///
    /// # Returns
    /// Always `buf.len()`.
    pub fn fill(&mut self, buf: &mut [u8]) -> usize {
        let len = buf.len();
        let drained = self.drain_leftover(buf);

        let mut chunks = buf[drained..].chunks_exact_mut(WORD_BYTES);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            let used = tail.len();
            tail.copy_from_slice(&bytes[..used]);
            self.leftover = bytes;
            self.leftover_start = used;
        }
        len
    }

    fn drain_leftover(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.pending_bytes());
        if n > 0 {
            let start = self.leftover_start;
            buf[..n].copy_from_slice(&self.leftover[start..start + n]);
            self.leftover_start += n;
        }
        n
    }
}

impl<R, M> Clone for Generator<R, M> {
    fn clone(&self) -> Self {
        Generator {
            state: self.state,
            cursor: self.cursor,
            leftover: self.leftover,
            leftover_start: self.leftover_start,
            _strategy: PhantomData,
        }
    }
}

impl<R, M> fmt::Debug for Generator<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .field("pending_bytes", &(WORD_BYTES - self.leftover_start))
            .finish()
    }
}

impl<R: NeighborhoodRule, M: StateMix> io::Read for Generator<R, M> {
    /// Never fails and always fills the whole buffer.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.fill(buf))
    }
}
