//! Neighborhood rules and state-time mixing strategies.
//!
//! A [`NeighborhoodRule`] computes one new word of the next generation from
//! the previous generation's word and its two ring neighbors. A
//! [`StateMix`] optionally folds the previous word back into the new one
//! before it is stored. Both are zero-sized strategy types selected through
//! the generator's type parameters.

use crate::utils::bits::{left_neighbors, right_neighbors};

use super::state::WORDS;

/// Rotation amounts used by [`Rotation`], one per ring word.
pub const ROTATION_SHIFTS: [u32; WORDS] = [13, 17, 23, 29];

/// Local update rule applied to every cell of the ring.
pub trait NeighborhoodRule {
    /// Number of cells consulted on each side of a cell.
    const RADIUS: u32;

    /// Computes the next-generation value of `center`.
    ///
    /// `prev` and `next` are the words to the left and right of `center`
    /// in the previous generation.
    fn evolve_word(prev: u64, center: u64, next: u64) -> u64;
}

/// Optional diffusion step applied when a new word is stored.
pub trait StateMix {
    /// Combines the freshly evolved word at `index` with the word it replaces.
    fn diffuse(index: usize, evolved: u64, previous: u64) -> u64;
}

/// Elementary Rule 30: `left XOR (center OR right)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Radius1;

impl NeighborhoodRule for Radius1 {
    const RADIUS: u32 = 1;

    #[inline(always)]
    fn evolve_word(prev: u64, center: u64, next: u64) -> u64 {
        let left = left_neighbors(center, prev, 1);
        let right = right_neighbors(center, next, 1);
        left ^ (center | right)
    }
}

/// Radius-2 extension of Rule 30:
/// `(left2 XOR left1) XOR (center OR right1 OR right2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Radius2;

impl NeighborhoodRule for Radius2 {
    const RADIUS: u32 = 2;

    #[inline(always)]
    fn evolve_word(prev: u64, center: u64, next: u64) -> u64 {
        let left1 = left_neighbors(center, prev, 1);
        let left2 = left_neighbors(center, prev, 2);
        let right1 = right_neighbors(center, next, 1);
        let right2 = right_neighbors(center, next, 2);
        (left2 ^ left1) ^ (center | right1 | right2)
    }
}

/// Stores evolved words unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl StateMix for Plain {
    #[inline(always)]
    fn diffuse(_index: usize, evolved: u64, _previous: u64) -> u64 {
        evolved
    }
}

/// XORs each evolved word with its predecessor rotated by [`ROTATION_SHIFTS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation;

impl StateMix for Rotation {
    #[inline(always)]
    fn diffuse(index: usize, evolved: u64, previous: u64) -> u64 {
        evolved ^ previous.rotate_left(ROTATION_SHIFTS[index])
    }
}
