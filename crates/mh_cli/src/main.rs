//! Monty Hall simulator CLI
//!
//! Runs one simulation batch per trial-count argument and prints the
//! observed win rates for the switch and stay strategies.

mod args;

use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use mh_core::{render_json, render_summary, render_table, SimulationEngine};

use crate::args::{parse_trial_count, ParsedCount, SMALL_BATCH_WARNING_THRESHOLD};

#[derive(Parser)]
#[command(name = "monty_hall_sim")]
#[command(about = "Estimate Monty Hall win rates for switch and stay strategies", long_about = None)]
#[command(version)]
struct Cli {
    /// Trial counts, one batch per value (minimum 2 trials each)
    #[arg(value_name = "TRIAL_COUNT", required = true, allow_hyphen_values = true)]
    counts: Vec<String>,

    /// RNG seed; defaults to the current time in milliseconds
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full run as JSON instead of text
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are successes; bad invocations are not.
            let usage_error = err.use_stderr();
            let _ = err.print();
            process::exit(if usage_error { 1 } else { 0 });
        }
    };

    let counts = validate_counts(&cli.counts)?;

    let seed = cli
        .seed
        .unwrap_or_else(|| Utc::now().timestamp_millis() as u64);
    log::info!("rng seed: {}", seed);

    let mut engine = SimulationEngine::new(seed);
    let results = engine.run_batches(&counts)?;

    if cli.json {
        println!("{}", render_json(seed, &results)?);
    } else if results.len() == 1 {
        println!("{}", render_summary(&results[0]));
    } else {
        println!("{}", render_table(&results));
    }

    Ok(())
}

/// Check every trial-count argument, reporting all bad ones before failing.
fn validate_counts(raw_counts: &[String]) -> Result<Vec<u64>> {
    let mut counts = Vec::with_capacity(raw_counts.len());
    let mut invalid = 0usize;

    for raw in raw_counts {
        match parse_trial_count(raw) {
            Ok(ParsedCount {
                trials,
                ignored_suffix,
            }) => {
                if let Some(suffix) = ignored_suffix {
                    eprintln!(
                        "warning: ignoring trailing {:?} in trial count {:?}",
                        suffix, raw
                    );
                }
                if trials < SMALL_BATCH_WARNING_THRESHOLD {
                    eprintln!(
                        "warning: {} trials is a small sample; win rates will be noisy",
                        trials
                    );
                }
                counts.push(trials);
            }
            Err(err) => {
                eprintln!("error: {}", err);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{} invalid trial count argument(s)", invalid);
    }

    Ok(counts)
}
