//! `rand_core` integration.
//!
//! Lets any generator variant drive the `rand` ecosystem (`Rng::gen_range`,
//! shuffles, distributions) while keeping its own byte stream semantics.

use rand_core::{Error, RngCore, SeedableRng};

use super::generator::Generator;
use super::rule::{NeighborhoodRule, StateMix};

impl<R: NeighborhoodRule, M: StateMix> RngCore for Generator<R, M> {
    fn next_u32(&mut self) -> u32 {
        Generator::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        Generator::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill(dest);
        Ok(())
    }
}

impl<R: NeighborhoodRule, M: StateMix> SeedableRng for Generator<R, M> {
    /// Little-endian encoding of the 64-bit seed.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Generator::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Generator::new(state)
    }
}

#[cfg(test)]
mod tests {
    use rand_core::{RngCore, SeedableRng};

    use crate::random::generator::{Ring30, Ring30R2};

    #[test]
    fn test_rng_core_matches_inherent_methods() {
        let mut via_trait = Ring30::new(12345);
        let mut inherent = Ring30::new(12345);
        assert_eq!(RngCore::next_u64(&mut via_trait), inherent.next_u64());
        assert_eq!(RngCore::next_u32(&mut via_trait), inherent.next_u32());

        let mut a = [0u8; 21];
        let mut b = [0u8; 21];
        via_trait.fill_bytes(&mut a);
        inherent.fill(&mut b);
        assert_eq!(a, b);
        assert!(via_trait.try_fill_bytes(&mut a).is_ok());
    }

    #[test]
    fn test_seed_from_u64_is_new() {
        let mut a = Ring30R2::seed_from_u64(777);
        let mut b = Ring30R2::new(777);
        assert_eq!(RngCore::next_u64(&mut a), b.next_u64());
    }

    #[test]
    fn test_from_seed_little_endian() {
        let mut a = Ring30::from_seed(12345u64.to_le_bytes());
        assert_eq!(RngCore::next_u64(&mut a), 0x5750_b659_2410_4eae);
    }
}
