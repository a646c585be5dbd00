//! Maximum-joltage subsequence selection over independent digit banks.
//!
//! Each bank is one line of digits; [`select`] keeps the `k` digits forming
//! the numerically largest order-preserving subsequence, and [`aggregate`]
//! sums selections across a whole batch of banks. The two puzzle parts run
//! the same engine with `k = 2` and `k = 12`.

pub mod aggregate;
pub mod bank;
pub mod parse;
pub mod part1;
pub mod part2;
pub mod select;

pub use aggregate::{aggregate, aggregate_observed};
pub use bank::Bank;
pub use select::{select, InvalidRequest};
