//! Configuration for generation runs.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Bounds on a single generation.
///
/// Self-referential tables stop only when the dice stop choosing the
/// recursive entry. These limits turn an unlucky or misconfigured run
/// into an error instead of unbounded recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest allowed nesting of generated tables (the root is depth 0).
    pub max_depth: usize,
    /// Most nodes one story tree may contain.
    pub max_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_nodes: 10_000,
        }
    }
}

/// Configuration for a generator or session.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Recursion guards.
    pub limits: Limits,
}

impl GeneratorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = max_depth;
        self
    }

    /// Set the maximum number of nodes per story.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.limits.max_nodes = max_nodes;
        self
    }

    /// Build the RNG this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_mechanics::RollSource;

    #[test]
    fn default_config() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.limits.max_depth, 64);
        assert_eq!(cfg.limits.max_nodes, 10_000);
    }

    #[test]
    fn builder_methods() {
        let cfg = GeneratorConfig::default()
            .with_seed(123)
            .with_max_depth(8)
            .with_max_nodes(100);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.limits, Limits { max_depth: 8, max_nodes: 100 });
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = GeneratorConfig::default().with_seed(7);
        let mut a = cfg.rng();
        let mut b = cfg.rng();
        for _ in 0..10 {
            assert_eq!(a.roll_die(12), b.roll_die(12));
        }
    }
}
