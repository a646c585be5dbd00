use miette::*;

use crate::aggregate::aggregate_observed;
use crate::parse;

/// Part 1 keeps the best two digits of every bank.
const REQUIRED_DIGITS: usize = 2;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse::banks(input)?;

    let total = aggregate_observed(&banks, REQUIRED_DIGITS, |elapsed| {
        tracing::debug!(?elapsed, k = REQUIRED_DIGITS, "batch aggregated");
    })?;

    Ok(total.to_string())
}
