//! Target-distribution scoring for submitted circuits
//!
//! Games check a player's circuit by comparing its output distribution with
//! the distribution the puzzle asks for. Scores run from 0 to 100.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::quantum::circuit::Circuit;
use crate::simulators::statevector::StatevectorSimulator;

/// Default average per-state deviation accepted as a match
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Outcome of comparing a circuit against a target distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Average deviation is within tolerance
    pub matches: bool,

    pub actual_probabilities: BTreeMap<String, f64>,

    pub target_probabilities: BTreeMap<String, f64>,

    /// `max(0, 1 - avg_diff) * 100`, rounded to two decimals
    pub score: f64,
}

impl VerificationReport {
    /// Report for a submission that could not be simulated
    pub fn rejected(target: &BTreeMap<String, f64>) -> Self {
        VerificationReport {
            matches: false,
            actual_probabilities: BTreeMap::new(),
            target_probabilities: target.clone(),
            score: 0.0,
        }
    }
}

/// Average absolute difference over the union of bitstrings in both maps.
/// Zero when both are empty.
pub fn average_deviation(actual: &BTreeMap<String, f64>, target: &BTreeMap<String, f64>) -> f64 {
    let states: BTreeSet<&String> = actual.keys().chain(target.keys()).collect();
    if states.is_empty() {
        return 0.0;
    }

    let total: f64 = states
        .iter()
        .map(|state| {
            let a = actual.get(*state).copied().unwrap_or(0.0);
            let t = target.get(*state).copied().unwrap_or(0.0);
            (t - a).abs()
        })
        .sum();

    total / states.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl StatevectorSimulator {
    /// Compare the exact output distribution of `circuit` with `target`
    pub fn verify(
        &self,
        circuit: &Circuit,
        target: &BTreeMap<String, f64>,
        tolerance: f64,
    ) -> Result<VerificationReport> {
        let result = self.simulate(circuit)?;
        let avg_diff = average_deviation(&result.probabilities, target);
        let score = round2((1.0 - avg_diff).max(0.0) * 100.0);
        let matches = avg_diff <= tolerance;

        debug!(avg_diff, score, matches, "verified circuit");

        Ok(VerificationReport {
            matches,
            actual_probabilities: result.probabilities,
            target_probabilities: target.clone(),
            score,
        })
    }

    /// Like [`StatevectorSimulator::verify`], but an invalid submission
    /// yields a rejected report with score 0 instead of an error
    pub fn verify_or_reject(
        &self,
        circuit: &Circuit,
        target: &BTreeMap<String, f64>,
        tolerance: f64,
    ) -> VerificationReport {
        match self.verify(circuit, target, tolerance) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, invalid_argument = err.is_invalid_argument(), "rejecting circuit submission");
                VerificationReport::rejected(target)
            }
        }
    }
}
