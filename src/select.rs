use miette::Diagnostic;
use num::{BigUint, Zero};
use thiserror::Error;

use crate::bank::Bank;

/// Raised when a selection asks for more digits than the bank holds.
///
/// Not recoverable within the engine; the computation is deterministic, so
/// retrying with the same input is meaningless.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("cannot select {required} digits from a bank of {available}")]
#[diagnostic(code(joltage::invalid_request))]
pub struct InvalidRequest {
    /// Requested selection length `k`.
    pub required: usize,
    /// Number of digits actually in the bank.
    pub available: usize,
    /// Index of the offending bank within a batch, filled in by the aggregator.
    pub bank: Option<usize>,
}

/// Finds the largest integer that can be formed by keeping exactly `k` digits
/// of `bank` while preserving their relative order.
///
/// Single left-to-right pass with a monotonic stack: a stacked digit is popped
/// whenever a larger digit arrives and the removal budget (`n - k`) is not yet
/// spent, then the stack is cut down to `k`. This selects, at every step, the
/// earliest occurrence of the maximum digit whose position still leaves enough
/// trailing digits to finish the selection, so the output matches the windowed
/// greedy scan exactly, earliest-max tie-break included, in O(n) instead of
/// O(n * k).
pub fn select(bank: &Bank, k: usize) -> Result<BigUint, InvalidRequest> {
    let digits = bank.digits();
    let n = digits.len();

    if k > n {
        return Err(InvalidRequest {
            required: k,
            available: n,
            bank: None,
        });
    }

    let mut to_remove = n - k;
    let mut stack: Vec<u8> = Vec::with_capacity(k);

    for &digit in digits {
        while to_remove > 0 && stack.last().is_some_and(|&top| top < digit) {
            stack.pop();
            to_remove -= 1;
        }
        stack.push(digit);
    }

    // Leftover budget means the tail was non-increasing; drop it from the end.
    stack.truncate(k);

    Ok(stack
        .into_iter()
        .fold(BigUint::zero(), |acc, digit| acc * 10u32 + u32::from(digit)))
}
