//! Configuration for test runs and shrinking behavior.

/// Configuration for a single run of a property test operation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Seed for an isolated deterministic stream. `None` draws from the
    /// process-wide shared stream.
    pub seed: Option<u64>,
    /// Maximum number of accepted shrink steps while minimizing a
    /// counterexample.
    pub max_shrink_steps: usize,
    /// Emit human-readable progress text on stderr.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_shrink_steps: 1000,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Create a run configuration with a fixed seed for reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Create a run configuration with a custom shrink step budget.
    pub fn with_max_shrink_steps(max_shrink_steps: usize) -> Self {
        Self {
            max_shrink_steps,
            ..Default::default()
        }
    }

    /// Enable verbose output.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Set the seed on an existing configuration.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_shrink_steps, 1000);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builders() {
        let config = RunConfig::with_seed(42).verbose();
        assert_eq!(config.seed, Some(42));
        assert!(config.verbose);

        let config = RunConfig::with_max_shrink_steps(10).seeded(7);
        assert_eq!(config.max_shrink_steps, 10);
        assert_eq!(config.seed, Some(7));
    }
}
