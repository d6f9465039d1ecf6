//! Renderers for batch results: plain summary, aligned table, JSON export.

use serde::Serialize;

use crate::error::Result;
use crate::models::{BatchResult, StrategyTally};

/// Two-line summary for a single batch, win rates as fractions.
pub fn render_summary(batch: &BatchResult) -> String {
    format!(
        "Switch: {:.4}\nStay:   {:.4}",
        batch.switch.win_rate(),
        batch.stay.win_rate()
    )
}

/// One table row per batch, win rates as percentages.
pub fn render_table(batches: &[BatchResult]) -> String {
    let mut lines = Vec::with_capacity(batches.len() + 1);
    lines.push(format!(
        "{:>12}  {:>10}  {:>10}",
        "Trials", "Switch %", "Stay %"
    ));

    for batch in batches {
        lines.push(format!(
            "{:>12}  {:>10.2}  {:>10.2}",
            batch.requested_trials,
            batch.switch.win_rate() * 100.0,
            batch.stay.win_rate() * 100.0
        ));
    }

    lines.join("\n")
}

#[derive(Debug, Serialize)]
pub struct StrategyReport {
    pub trials: u64,
    pub wins: u64,
    pub win_rate: f64,
}

impl From<StrategyTally> for StrategyReport {
    fn from(tally: StrategyTally) -> Self {
        StrategyReport {
            trials: tally.trials,
            wins: tally.wins,
            win_rate: tally.win_rate(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub requested_trials: u64,
    pub switch: StrategyReport,
    pub stay: StrategyReport,
}

/// Machine-readable run report, versioned for downstream consumers.
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub schema_version: u8,
    pub seed: u64,
    pub batches: Vec<BatchReport>,
}

impl SimulationReport {
    pub fn new(seed: u64, results: &[BatchResult]) -> Self {
        SimulationReport {
            schema_version: crate::SCHEMA_VERSION,
            seed,
            batches: results
                .iter()
                .map(|batch| BatchReport {
                    requested_trials: batch.requested_trials,
                    switch: batch.switch.into(),
                    stay: batch.stay.into(),
                })
                .collect(),
        }
    }
}

/// Serialize the full run as pretty-printed JSON.
pub fn render_json(seed: u64, results: &[BatchResult]) -> Result<String> {
    let report = SimulationReport::new(seed, results);
    Ok(serde_json::to_string_pretty(&report)?)
}

// ============================================================================
// Tests
// ============================================================================
