use std::fmt;

/// Expense amounts are plain decimals as typed by the user.
/// Sums accumulate in entry order with no rounding compensation.
pub type Amount = f64;

/// Parse a decimal string into an amount.
/// Example: "50.00" -> 50.0, "12.5" -> 12.5, " 100 " -> 100.0
///
/// Blank input is `Empty`; anything that is not a finite decimal
/// (including "inf" and "NaN") is `InvalidFormat`. The sign is not checked.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Amount = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !amount.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }

    Ok(amount)
}

/// Format an amount with thousands separators and two decimals.
/// Example: 1250.0 -> "1,250.00", -1234.5 -> "-1,234.50"
pub fn format_amount(amount: Amount) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (units, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Avoid printing "-0.00" for tiny negatives that round to zero
    let sign = if amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, decimals)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is required"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(1250.0), "1,250.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(41.666_666), "41.67");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50.00"), Ok(50.0));
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount(".50"), Ok(0.5));
        assert_eq!(parse_amount("  7.25 "), Ok(7.25));
        assert_eq!(parse_amount("-20"), Ok(-20.0)); // Sign is not validated
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("abc"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("12.34.56"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("inf"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("NaN"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("1,000"), Err(ParseAmountError::InvalidFormat));
    }
}
