//! Bridge generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::state::{validate_length, Lane};

/// Source of 0/1 values, one per bridge position.
pub trait NumberGenerator {
    fn generate(&mut self) -> u8;
}

/// Uniform 0/1 generator backed by [`StdRng`].
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Seed from the operating system.
    pub fn new() -> Self {
        RandomNumberGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible bridges.
    pub fn seeded(seed: u64) -> Self {
        RandomNumberGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn generate(&mut self) -> u8 {
        self.rng.random_range(0..=1)
    }
}

/// Builds bridges from a [`NumberGenerator`].
pub struct BridgeMaker<G> {
    generator: G,
}

impl<G: NumberGenerator> BridgeMaker<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Make a bridge of `size` lanes, drawing one value per position
    /// (1 is up, 0 is down).
    pub fn make_bridge(&mut self, size: usize) -> Result<Vec<Lane>, GameError> {
        validate_length(size)?;
        let bridge = (0..size)
            .map(|_| Lane::from_number(self.generator.generate()))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(size, "bridge made");
        Ok(bridge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::lanes_to_string;
    use pretty_assertions::assert_eq;

    /// Replays a fixed sequence of values.
    struct Scripted(std::vec::IntoIter<u8>);

    impl Scripted {
        fn new(values: &[u8]) -> Self {
            Scripted(values.to_vec().into_iter())
        }
    }

    impl NumberGenerator for Scripted {
        fn generate(&mut self) -> u8 {
            self.0.next().unwrap_or(0)
        }
    }

    #[test]
    fn test_make_bridge_mapping() {
        let mut maker = BridgeMaker::new(Scripted::new(&[1, 0, 0, 1]));
        let bridge = maker.make_bridge(4).unwrap();
        assert_eq!(lanes_to_string(&bridge), "UDDU");
    }

    #[test]
    fn test_make_bridge_size_bounds() {
        let mut maker = BridgeMaker::new(Scripted::new(&[]));
        assert_eq!(maker.make_bridge(2), Err(GameError::InvalidLength(2)));
        assert_eq!(maker.make_bridge(21), Err(GameError::InvalidLength(21)));
        assert_eq!(maker.make_bridge(3).unwrap().len(), 3);
        assert_eq!(maker.make_bridge(20).unwrap().len(), 20);
    }

    #[test]
    fn test_make_bridge_rejects_bad_value() {
        let mut maker = BridgeMaker::new(Scripted::new(&[1, 7, 0]));
        assert_eq!(maker.make_bridge(3), Err(GameError::InvalidLaneNumber(7)));
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a = BridgeMaker::new(RandomNumberGenerator::seeded(42)).make_bridge(20);
        let b = BridgeMaker::new(RandomNumberGenerator::seeded(42)).make_bridge(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_generator_yields_bits() {
        let mut generator = RandomNumberGenerator::new();
        for _ in 0..100 {
            assert!(generator.generate() <= 1);
        }
    }
}
