use miette::*;

use crate::aggregate::aggregate_observed;
use crate::parse;

/// Part 2 keeps the best twelve digits of every bank.
const REQUIRED_DIGITS: usize = 12;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse::banks(input)?;

    let total = aggregate_observed(&banks, REQUIRED_DIGITS, |elapsed| {
        tracing::debug!(?elapsed, k = REQUIRED_DIGITS, "batch aggregated");
    })?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("3121910778619", process(input)?);
        Ok(())
    }
}
