//! Random number generation subsystem for ring30.
//!
//! Layers, from the automaton up:
//!
//! ```text
//! state       (256-bit ring, seeding)
//!   ↓ evolution::step with a rule + state mix
//! generator   (word cursor, mix at consumption, byte stream)
//!   ↓
//! scalar      (u32/u64, non-negative and bounded integers)
//! distribution(uniform floats, normal, exponential)
//! ```

pub mod distribution;
pub mod evolution;
pub mod generator;
pub mod mix;
pub mod rng_core;
pub mod rule;
pub mod scalar;
pub mod state;
