//! Floating-point uniforms and the normal and exponential distributions.

use super::generator::Generator;
use super::rule::{NeighborhoodRule, StateMix};

/// 2^-53, the spacing of `f64` uniforms.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24, the spacing of `f32` uniforms.
const F32_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

impl<R: NeighborhoodRule, M: StateMix> Generator<R, M> {
    /// Returns a uniform `f64` in `[0, 1)` with 53 bits of precision.
    ///
    /// Uses the top 53 bits of [`next_int_63`](Self::next_int_63).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_int_63() >> 10) as f64 * F64_UNIT
    }

    /// Returns a uniform `f32` in `[0, 1)` with 24 bits of precision.
    ///
    /// Uses the top 24 bits of [`next_int_31`](Self::next_int_31).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_int_31() >> 7) as f32 * F32_UNIT
    }

    /// Returns a standard normal sample (mean 0, standard deviation 1).
    ///
    /// Marsaglia polar method: draws points in the square `[-1, 1)^2` until
    /// one lands strictly inside the unit circle and off the origin.
    pub fn next_norm_f64(&mut self) -> f64 {
        loop {
            let u = 2.0 * self.next_f64() - 1.0;
            let v = 2.0 * self.next_f64() - 1.0;
            let s = u * u + v * v;
            if s < 1.0 && s != 0.0 {
                return u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }

    /// Returns an exponential sample with rate 1.
    ///
    /// Redraws exact zeros so the logarithm stays finite.
    pub fn next_exp_f64(&mut self) -> f64 {
        loop {
            let u = self.next_f64();
            if u > 0.0 {
                return -u.ln();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::random::generator::{Ring30, Ring30R2};
    use crate::random::mix::mix;
    use crate::random::state::State;

    #[test]
    fn test_next_f64_range() {
        let mut rng = Ring30::new(42);
        for _ in 0..10_000 {
            let val = rng.next_f64();
            assert!((0.0..1.0).contains(&val), "next_f64 out of range: {}", val);
        }
    }

    #[test]
    fn test_next_f32_range() {
        let mut rng = Ring30R2::new(42);
        for _ in 0..10_000 {
            let val = rng.next_f32();
            assert!((0.0..1.0).contains(&val), "next_f32 out of range: {}", val);
        }
    }

    #[test]
    fn test_next_f64_uses_top_53_bits() {
        let mut a = Ring30::new(12345);
        let mut b = Ring30::new(12345);
        let expected = ((b.next_u64() & 0x7FFF_FFFF_FFFF_FFFF) >> 10) as f64 / 9_007_199_254_740_992.0;
        assert_eq!(a.next_f64(), expected);
    }

    #[test]
    fn test_next_f32_uses_top_24_bits() {
        let mut a = Ring30::new(12345);
        let mut b = Ring30::new(12345);
        let int31 = (b.next_u64() as u32) >> 1;
        let expected = (int31 >> 7) as f32 / 16_777_216.0;
        assert_eq!(a.next_f32(), expected);
    }

    #[test]
    fn test_zero_ring_gives_zero_uniform() {
        // zero words mix to zero
        let mut zeros = Ring30::with_state(State::from_words([0; 4]), 0).unwrap();
        assert_eq!(zeros.next_f64(), 0.0);
        assert_eq!(zeros.next_f32(), 0.0);
    }

    #[test]
    fn test_exp_redraws_zero_uniforms() {
        // words 0..=2 yield u == 0.0 and must be skipped
        let mut rng = Ring30::with_state(State::from_words([0, 0, 0, 1]), 0).unwrap();
        let u = ((mix(1) & 0x7FFF_FFFF_FFFF_FFFF) >> 10) as f64 / 9_007_199_254_740_992.0;
        assert_eq!(rng.next_exp_f64(), -u.ln());
        assert_eq!(rng.cursor(), 4);
    }

    #[test]
    fn test_exp_positive_and_finite() {
        let mut rng = Ring30::new(123);
        for _ in 0..1000 {
            let x = rng.next_exp_f64();
            assert!(x.is_finite() && x > 0.0, "exp sample {}", x);
        }
    }

    #[test]
    fn test_norm_finite() {
        let mut rng = Ring30R2::new(99);
        for _ in 0..1000 {
            assert!(rng.next_norm_f64().is_finite());
        }
    }

    #[test]
    fn test_distributions_deterministic() {
        let mut a = Ring30::new(31337);
        let mut b = Ring30::new(31337);
        for _ in 0..100 {
            assert_eq!(a.next_norm_f64(), b.next_norm_f64());
            assert_eq!(a.next_exp_f64(), b.next_exp_f64());
        }
    }
}
