//! Output mixing (avalanche) function.
//!
//! Applied to each word as it is consumed, never to the stored ring, so the
//! automaton itself is unaffected by how much output has been read.

/// Golden-ratio multiplier (2^64 / phi, odd).
pub const MIX_MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// Rotation used by the first mixing round.
pub const MIX_ROTATION: u32 = 13;

/// Right shift used by the final mixing round.
pub const MIX_SHIFT: u32 = 27;

/// Whitens one extracted ring word.
///
/// ```text
/// x ^= rotate_left(x, 13)
/// x *= 0x9e3779b97f4a7c15
/// x ^= x >> 27
/// ```
///
/// The multiply and shift rounds are bijective. The first round maps a word
/// and its bitwise complement to the same value.
#[inline(always)]
pub fn mix(word: u64) -> u64 {
    let mut x = word;
    x ^= x.rotate_left(MIX_ROTATION);
    x = x.wrapping_mul(MIX_MULTIPLIER);
    x ^= x >> MIX_SHIFT;
    x
}
