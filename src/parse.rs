use chumsky::prelude::*;
use miette::*;

use crate::bank::Bank;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Splits puzzle input into banks, one per line of ASCII digits.
///
/// Anything other than digit lines is a parse failure, so every bank handed to
/// the engine is already known to be well formed.
pub fn banks(input: &str) -> Result<Vec<Bank>> {
    let lines = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(lines.into_iter().map(Bank::from_line).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bank_per_line() -> Result<()> {
        let parsed = banks("3791\n9192")?;
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].digits(), &[3, 7, 9, 1]);
        assert_eq!(parsed[1].digits(), &[9, 1, 9, 2]);
        Ok(())
    }

    #[test]
    fn trailing_newline_is_tolerated() -> Result<()> {
        let parsed = banks("555\n102030\n")?;
        assert_eq!(parsed.len(), 2);
        Ok(())
    }

    #[test]
    fn non_digit_input_is_rejected() {
        assert!(banks("37a1").is_err());
    }
}
