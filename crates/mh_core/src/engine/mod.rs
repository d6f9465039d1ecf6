//! Batch simulation engine.
//!
//! The engine owns the seeded RNG and drives trials through the pure
//! functions in [`trial`]. Strategies are assigned by trial parity so a
//! single batch exercises both `Switch` and `Stay` on the same RNG stream.

pub mod trial;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SimError};
use crate::models::{BatchResult, Strategy, StrategyTally};

/// Smallest batch that still exercises both strategies.
pub const MIN_TRIALS_PER_BATCH: u64 = 2;

pub struct SimulationEngine {
    rng: ChaCha8Rng,
    original_seed: u64,
}

impl SimulationEngine {
    pub fn new(seed: u64) -> Self {
        SimulationEngine {
            rng: ChaCha8Rng::seed_from_u64(seed),
            original_seed: seed,
        }
    }

    /// Seed the engine was created with.
    pub fn seed(&self) -> u64 {
        self.original_seed
    }

    /// Run one batch of `total_trials` rounds and tally wins per strategy.
    pub fn run_batch(&mut self, total_trials: u64) -> Result<BatchResult> {
        if total_trials < MIN_TRIALS_PER_BATCH {
            return Err(SimError::TooFewTrials {
                requested: total_trials,
                minimum: MIN_TRIALS_PER_BATCH,
            });
        }

        let mut switch = StrategyTally::default();
        let mut stay = StrategyTally::default();

        for index in 0..total_trials {
            let strategy = Strategy::for_trial_index(index);
            let outcome = trial::run_trial(strategy, &mut self.rng);
            match strategy {
                Strategy::Switch => switch.record(outcome.won),
                Strategy::Stay => stay.record(outcome.won),
            }
        }

        log::debug!(
            "batch of {} trials: switch {}/{}, stay {}/{}",
            total_trials,
            switch.wins,
            switch.trials,
            stay.wins,
            stay.trials
        );

        Ok(BatchResult {
            requested_trials: total_trials,
            switch,
            stay,
        })
    }

    /// Run every batch in order on the same RNG stream.
    pub fn run_batches(&mut self, counts: &[u64]) -> Result<Vec<BatchResult>> {
        counts.iter().map(|&total| self.run_batch(total)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
