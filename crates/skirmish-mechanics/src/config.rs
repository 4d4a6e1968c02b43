//! Run configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::batch::DEFAULT_TRIALS;

/// Settings for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Matches to play in batch mode.
    pub trials: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trials: DEFAULT_TRIALS,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of batch trials.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Build the random source for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
