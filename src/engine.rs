//! Batch contrast checking.

use rayon::prelude::*;
use tracing::debug;

use crate::checker;
use crate::types::{BatchOutcome, Color, ColorPair, ComplianceLevel, InvalidPair, PairOutcome};

/// Check many color pairs and categorize the results.
///
/// Pairs are evaluated in parallel via Rayon's `par_iter()`; each entry is
/// parsed and checked independently, so no shared state exists across
/// entries. Categories preserve input order, which keeps output
/// deterministic regardless of scheduling.
///
/// A malformed entry lands in `invalid` with its parse error; it never
/// aborts the rest of the batch.
pub fn evaluate_all(pairs: &[ColorPair], default_level: ComplianceLevel) -> BatchOutcome {
    let checked: Vec<Result<PairOutcome, InvalidPair>> = pairs
        .par_iter()
        .map(|pair| check_pair(pair, default_level))
        .collect();

    let mut outcome = BatchOutcome::default();
    for entry in checked {
        match entry {
            Ok(pair) if pair.result.passes => outcome.passed.push(pair),
            Ok(pair) => outcome.violations.push(pair),
            Err(invalid) => outcome.invalid.push(invalid),
        }
    }

    debug!(
        "checked {} pair(s): {} violations, {} passed, {} invalid",
        pairs.len(),
        outcome.violations.len(),
        outcome.passed.len(),
        outcome.invalid.len()
    );
    outcome
}

fn check_pair(
    pair: &ColorPair,
    default_level: ComplianceLevel,
) -> Result<PairOutcome, InvalidPair> {
    let parse = |input: &str| {
        input.parse::<Color>().map_err(|e| InvalidPair {
            background: pair.background.clone(),
            text: pair.text.clone(),
            error: e.to_string(),
        })
    };

    let background = parse(&pair.background)?;
    let text = parse(&pair.text)?;
    let level = pair.level.unwrap_or(default_level);

    Ok(PairOutcome {
        background,
        text,
        result: checker::evaluate(background, text, level),
    })
}
