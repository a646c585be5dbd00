use std::time::{Duration, Instant};

use num::{BigUint, Zero};
use rayon::prelude::*;

use crate::bank::Bank;
use crate::select::{select, InvalidRequest};

/// Sums the maximum `k`-digit selection of every bank in the batch.
///
/// Banks are independent, so the map fans out over the rayon pool; the
/// reduction is big-integer addition, which is commutative and associative, so
/// worker scheduling cannot change the total. A bank shorter than `k` aborts
/// the batch with [`InvalidRequest`] carrying that bank's index.
pub fn aggregate(banks: &[Bank], k: usize) -> Result<BigUint, InvalidRequest> {
    banks
        .par_iter()
        .enumerate()
        .map(|(index, bank)| {
            select(bank, k).map_err(|err| InvalidRequest {
                bank: Some(index),
                ..err
            })
        })
        .try_reduce(BigUint::zero, |a, b| Ok(a + b))
}

/// Same computation as [`aggregate`], reporting the batch's wall-clock
/// duration to a caller-supplied hook whether the batch completes or aborts.
pub fn aggregate_observed<F>(
    banks: &[Bank],
    k: usize,
    observe: F,
) -> Result<BigUint, InvalidRequest>
where
    F: FnOnce(Duration),
{
    let started = Instant::now();
    let result = aggregate(banks, k);
    observe(started.elapsed());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banks(lines: &[&str]) -> Vec<Bank> {
        lines.iter().copied().map(Bank::from_line).collect()
    }

    #[test]
    fn sums_per_bank_selections() {
        let banks = banks(&["3791", "9192"]);
        assert_eq!(aggregate(&banks, 2), Ok(BigUint::from(91u32 + 99)));
    }

    #[test]
    fn total_is_independent_of_bank_order() {
        let forward = banks(&["3791", "9192", "555", "102030"]);
        let mut shuffled = forward.clone();
        shuffled.swap(0, 3);
        shuffled.swap(1, 2);

        let expected: BigUint = forward
            .iter()
            .map(|bank| select(bank, 2).unwrap())
            .sum();
        assert_eq!(aggregate(&forward, 2), Ok(expected.clone()));
        assert_eq!(aggregate(&shuffled, 2), Ok(expected));
    }

    #[test]
    fn empty_batch_sums_to_zero() {
        assert_eq!(aggregate(&[], 12), Ok(BigUint::zero()));
    }

    #[test]
    fn short_bank_aborts_with_its_index() {
        let banks = banks(&["987654321111111", "12", "811111111111119"]);
        assert_eq!(
            aggregate(&banks, 12),
            Err(InvalidRequest {
                required: 12,
                available: 2,
                bank: Some(1),
            })
        );
    }

    #[test]
    fn observer_sees_a_duration_and_the_same_total() {
        let banks = banks(&["818181911112111", "234234234234278"]);
        let mut observed = None;
        let total = aggregate_observed(&banks, 12, |elapsed| observed = Some(elapsed)).unwrap();
        assert_eq!(Some(total), aggregate(&banks, 12).ok());
        assert!(observed.is_some());
    }

    #[test]
    fn observer_still_fires_when_the_batch_aborts() {
        let banks = banks(&["987654321111111", "12"]);
        let mut observed = None;
        let result = aggregate_observed(&banks, 12, |elapsed| observed = Some(elapsed));
        assert!(result.is_err());
        assert!(observed.is_some());
    }
}
