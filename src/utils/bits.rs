//! Bit neighborhood utilities for 64-bit ring words.
//!
//! Within a word, bit 63 is the leftmost cell and bit 0 the rightmost.
//! Words are laid out left to right around the ring, so the cells to the
//! left of bit 63 of word `i` are the low bits of word `i - 1`, and the
//! cells to the right of bit 0 are the high bits of word `i + 1`.

/// Largest neighbor distance supported by the borrowing helpers.
pub const MAX_DISTANCE: u32 = 63;

/// Returns, for every bit of `center`, its neighbor `distance` cells to the left.
///
/// Bit `p` of the result is bit `p + distance` of `center`; the top
/// `distance` bits are borrowed from the low bits of `prev`, the word on
/// the left in the ring.
///
/// # Parameters
/// - `center`: The word whose neighbors are computed.
/// - `prev`: The word immediately to the left of `center`.
/// - `distance`: Neighbor distance (1..=63).
#[inline(always)]
pub fn left_neighbors(center: u64, prev: u64, distance: u32) -> u64 {
    debug_assert!((1..=MAX_DISTANCE).contains(&distance));
    (center >> distance) | (prev << (64 - distance))
}

/// Returns, for every bit of `center`, its neighbor `distance` cells to the right.
///
/// Bit `p` of the result is bit `p - distance` of `center`; the bottom
/// `distance` bits are borrowed from the high bits of `next`, the word on
/// the right in the ring.
///
/// # Parameters
/// - `center`: The word whose neighbors are computed.
/// - `next`: The word immediately to the right of `center`.
/// - `distance`: Neighbor distance (1..=63).
#[inline(always)]
pub fn right_neighbors(center: u64, next: u64, distance: u32) -> u64 {
    debug_assert!((1..=MAX_DISTANCE).contains(&distance));
    (center << distance) | (next >> (64 - distance))
}

/// Number of bit positions in which `a` and `b` differ.
#[inline]
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}
