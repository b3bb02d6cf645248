//! ring30: a deterministic PRNG built on a Rule 30 cellular automaton.
//!
//! The generator evolves a 256-bit circular strip of cells (four `u64`
//! words) with a non-linear neighborhood rule, whitens each word with a
//! cheap avalanche mix as it is read, and derives integers, floats and
//! distribution samples from the resulting word stream.
//!
//! The output for a given seed is fixed: bytes are the mixed words in
//! little-endian order, and reading them in any chunking yields the same
//! sequence. The generator is not cryptographically secure.
//!
//! # Architecture
//!
//! ```text
//! State       (4 × 64-bit ring, seeded from a u64)
//!     ↓ evolution::step  (NeighborhoodRule + StateMix, one generation)
//! Generator   (word cursor → mix() → byte stream with leftover carry)
//!     ↓
//! scalar / distribution accessors, io::Read, rand_core::RngCore
//! ```
//!
//! # Examples
//!
//! Read raw bytes and typed values:
//!
//! ```
//! use ring30::Ring30;
//!
//! let mut rng = Ring30::new(12345);
//!
//! let mut buf = [0u8; 8];
//! rng.fill(&mut buf);
//! assert_eq!(buf, [0xae, 0x4e, 0x10, 0x24, 0x59, 0xb6, 0x50, 0x57]);
//!
//! let die = rng.next_int_bounded(6).unwrap() + 1;
//! assert!((1..=6).contains(&die));
//!
//! let x = rng.next_f64();
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! Invalid bounds are reported, not panicked on:
//!
//! ```
//! use ring30::{Ring30, Ring30Error};
//!
//! let mut rng = Ring30::new(1);
//! assert_eq!(rng.next_int_63_bounded(0), Err(Ring30Error::InvalidBound(0)));
//! ```
//!
//! Pick the radius-2 variant with rotation state mixing:
//!
//! ```
//! use ring30::Ring30R2;
//!
//! let mut rng = Ring30R2::new(42);
//! let sample = rng.next_norm_f64();
//! assert!(sample.is_finite());
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod random;
pub mod utils;

pub use error::Ring30Error;
pub use random::generator::{Generator, Ring30, Ring30R2, WARMUP_GENERATIONS};
pub use random::mix::mix;
pub use random::rule::{NeighborhoodRule, Plain, Radius1, Radius2, Rotation, StateMix};
pub use random::state::{State, STATE_BYTES, WORDS, WORD_BYTES};
