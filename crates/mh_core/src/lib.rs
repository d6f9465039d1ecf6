//! # mh_core - Deterministic Monty Hall Simulation Engine
//!
//! This library runs batches of Monty Hall trials and measures how the
//! "switch" and "stay" strategies perform against each other.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Interleaved strategy assignment: even trial indices switch, odd stay
//! - Text summary, comparison table, and JSON reporting

pub mod engine;
pub mod error;
pub mod models;
pub mod report;

pub use engine::trial::{reveal_losing_door, run_trial, switch_pick};
pub use engine::{SimulationEngine, MIN_TRIALS_PER_BATCH};
pub use error::{Result, SimError};
pub use models::{BatchResult, DoorIndex, Strategy, StrategyTally, TrialOutcome, DOOR_COUNT};
pub use report::{render_json, render_summary, render_table, SimulationReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut first = SimulationEngine::new(999);
        let mut second = SimulationEngine::new(999);

        let counts = [250, 4_000];
        let a = first.run_batches(&counts).unwrap();
        let b = second.run_batches(&counts).unwrap();

        assert_eq!(a, b, "Same seed should produce same results");
    }

    #[test]
    fn test_convergence_toward_known_rates() {
        let mut engine = SimulationEngine::new(42);
        let result = engine.run_batch(10_000).unwrap();

        let switch_rate = result.switch.win_rate();
        let stay_rate = result.stay.win_rate();

        assert!(
            (0.63..=0.70).contains(&switch_rate),
            "Switch win rate should approach 2/3: {}",
            switch_rate
        );
        assert!(
            (0.30..=0.37).contains(&stay_rate),
            "Stay win rate should approach 1/3: {}",
            stay_rate
        );
    }

    #[test]
    fn test_rates_are_valid_frequencies() {
        let mut engine = SimulationEngine::new(7);
        for result in engine.run_batches(&[2, 3, 500]).unwrap() {
            assert!((0.0..=1.0).contains(&result.switch.win_rate()));
            assert!((0.0..=1.0).contains(&result.stay.win_rate()));
        }
    }
}
