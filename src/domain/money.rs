use std::fmt;

/// Amounts are integer cents so that bills add up exactly.
/// A nightly rate of $100 is stored as 10000.
pub type Cents = i64;

/// Format cents with two decimals.
/// Example: 25500 -> "255.00", -150 -> "-1.50"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format cents the way the front desk prints prices: "$15.00".
pub fn format_price(cents: Cents) -> String {
    if cents < 0 {
        format!("-${}", format_cents(-cents))
    } else {
        format!("${}", format_cents(cents))
    }
}

/// Parse a decimal string into cents. A leading "$" is accepted.
/// Example: "15" -> 1500, "2.5" -> 250, "$18.00" -> 1800
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let negative = input.starts_with('-');
    let input = input.trim_start_matches('-').trim_start_matches('$');

    if input.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    if decimal_str.contains('.') || (units_str.is_empty() && decimal_str.is_empty()) {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.chars().all(|c| c.is_ascii_digit())
        || !decimal_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?
    };

    // Extra decimal places are truncated
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => decimal_str.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => decimal_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::Overflow)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    Empty,
    InvalidFormat,
    Overflow,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::Empty => write!(f, "empty amount"),
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Overflow => write!(f, "amount too large"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
