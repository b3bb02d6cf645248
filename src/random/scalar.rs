//! Integer accessors built on the generator's word stream.
//!
//! Every accessor consumes exactly one word per draw. Bounded accessors use
//! rejection sampling for bounds that are not powers of two, discarding
//! draws above the largest multiple of `n` so the reduction modulo `n` is
//! unbiased.

use log::debug;

use crate::error::Ring30Error;

use super::generator::Generator;
use super::rule::{NeighborhoodRule, StateMix};

/// Mask clearing the sign bit of a 64-bit value.
const MASK_63: u64 = 0x7FFF_FFFF_FFFF_FFFF;

impl<R: NeighborhoodRule, M: StateMix> Generator<R, M> {
    /// Returns the low 32 bits of the next word.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Returns a non-negative value in `[0, 2^63)`.
    #[inline]
    pub fn next_int_63(&mut self) -> i64 {
        (self.next_u64() & MASK_63) as i64
    }

    /// Returns a non-negative value in `[0, 2^31)`.
    ///
    /// Takes the top 31 bits of [`next_u32`](Self::next_u32).
    #[inline]
    pub fn next_int_31(&mut self) -> i32 {
        (self.next_u32() >> 1) as i32
    }

    /// Returns a non-negative `isize`.
    #[inline]
    pub fn next_int(&mut self) -> isize {
        (self.next_int_63() as usize & isize::MAX as usize) as isize
    }

    /// Returns a uniform value in `[0, n)`.
    ///
    /// Powers of two are served by masking one draw. Other bounds reject
    /// draws above `2^63 - 1 - (2^63 mod n)`.
    ///
    /// # Errors
    /// Returns [`Ring30Error::InvalidBound`] if `n <= 0`. The generator
    /// state is left untouched in that case.
    pub fn next_int_63_bounded(&mut self, n: i64) -> Result<i64, Ring30Error> {
        if n <= 0 {
            debug!("rejected 63-bit bound {}", n);
            return Err(Ring30Error::InvalidBound(n));
        }
        if n & (n - 1) == 0 {
            return Ok(self.next_int_63() & (n - 1));
        }
        let max = i64::MAX - ((1u64 << 63) % n as u64) as i64;
        let mut v = self.next_int_63();
        while v > max {
            v = self.next_int_63();
        }
        Ok(v % n)
    }

    /// Returns a uniform value in `[0, n)`.
    ///
    /// Same scheme as [`next_int_63_bounded`](Self::next_int_63_bounded)
    /// over 31-bit draws.
    ///
    /// # Errors
    /// Returns [`Ring30Error::InvalidBound`] if `n <= 0`. The generator
    /// state is left untouched in that case.
    pub fn next_int_31_bounded(&mut self, n: i32) -> Result<i32, Ring30Error> {
        if n <= 0 {
            debug!("rejected 31-bit bound {}", n);
            return Err(Ring30Error::InvalidBound(n as i64));
        }
        if n & (n - 1) == 0 {
            return Ok(self.next_int_31() & (n - 1));
        }
        let max = i32::MAX - ((1u32 << 31) % n as u32) as i32;
        let mut v = self.next_int_31();
        while v > max {
            v = self.next_int_31();
        }
        Ok(v % n)
    }

    /// Returns a uniform value in `[0, n)`.
    ///
    /// Bounds that fit in 31 bits use the 31-bit path, larger ones the
    /// 63-bit path.
    ///
    /// # Errors
    /// Returns [`Ring30Error::InvalidBound`] if `n <= 0`.
    pub fn next_int_bounded(&mut self, n: isize) -> Result<isize, Ring30Error> {
        if n <= 0 {
            debug!("rejected bound {}", n);
            return Err(Ring30Error::InvalidBound(n as i64));
        }
        if n <= i32::MAX as isize {
            self.next_int_31_bounded(n as i32).map(|v| v as isize)
        } else {
            self.next_int_63_bounded(n as i64).map(|v| v as isize)
        }
    }
}
