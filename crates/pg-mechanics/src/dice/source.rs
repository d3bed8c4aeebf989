//! Sources of die faces.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// Something that can produce die faces.
///
/// Every roll in the generator goes through this trait, so a seeded RNG
/// gives reproducible results and [`FixedRolls`] gives fully scripted ones.
pub trait RollSource {
    /// Produce a face in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl RollSource for StdRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = self.random_range(1..=sides.max(1));
        tracing::trace!(sides, face, "rolled die");
        face
    }
}

/// A scripted roll source that replays a fixed sequence of faces.
///
/// Faces are clamped into the die's range. Once the script runs out,
/// every further roll yields 1.
#[derive(Debug, Clone, Default)]
pub struct FixedRolls {
    faces: VecDeque<u32>,
}

impl FixedRolls {
    /// Create a source that replays `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Number of scripted faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RollSource for FixedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.faces.pop_front().unwrap_or(1).clamp(1, sides.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn fixed_rolls_replay_in_order() {
        let mut rolls = FixedRolls::new([3, 1, 4]);
        assert_eq!(rolls.roll_die(6), 3);
        assert_eq!(rolls.roll_die(6), 1);
        assert_eq!(rolls.roll_die(6), 4);
        assert_eq!(rolls.remaining(), 0);
    }

    #[test]
    fn fixed_rolls_clamp_and_exhaust() {
        let mut rolls = FixedRolls::new([9, 0]);
        assert_eq!(rolls.roll_die(6), 6);
        assert_eq!(rolls.roll_die(6), 1);
        assert_eq!(rolls.roll_die(6), 1);
    }

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let face = rng.roll_die(12);
            assert!((1..=12).contains(&face));
        }
    }

    #[test]
    fn std_rng_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(rng1.roll_die(20), rng2.roll_die(20));
        }
    }
}
