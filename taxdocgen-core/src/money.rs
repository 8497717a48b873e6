//! Dollar formatting and the fixed derived-value ratios.
//!
//! The ratios are fixture constants with no tax-law meaning: downstream
//! extraction tests only care that the numbers on the page are stable
//! functions of the primary amount, so they must be reproduced exactly.

/// Federal income tax withheld as a share of wages (W-2 box 2).
pub const FEDERAL_WITHHOLDING_RATE: f64 = 0.22;

/// Social security tax withheld as a share of wages (W-2 box 4).
pub const SOCIAL_SECURITY_RATE: f64 = 0.062;

/// Medicare tax withheld as a share of wages (W-2 box 6).
pub const MEDICARE_RATE: f64 = 0.0145;

/// Qualified share of total ordinary dividends (1099-DIV box 1b).
pub const QUALIFIED_DIVIDEND_SHARE: f64 = 0.80;

/// Outstanding principal as a multiple of annual interest (1098 box 2).
pub const MORTGAGE_PRINCIPAL_MULTIPLIER: f64 = 25.0;

pub fn federal_withholding(wages: f64) -> f64 {
    wages * FEDERAL_WITHHOLDING_RATE
}

pub fn social_security_tax(wages: f64) -> f64 {
    wages * SOCIAL_SECURITY_RATE
}

pub fn medicare_tax(wages: f64) -> f64 {
    wages * MEDICARE_RATE
}

pub fn qualified_dividends(total_dividends: f64) -> f64 {
    total_dividends * QUALIFIED_DIVIDEND_SHARE
}

pub fn outstanding_principal(annual_interest: f64) -> f64 {
    annual_interest * MORTGAGE_PRINCIPAL_MULTIPLIER
}

/// Formats an amount the way the forms display money: a dollar sign,
/// thousands-grouped integer digits and exactly two decimals, e.g.
/// `$75,432.00`. Negative amounts keep the sign after the dollar sign
/// (`$-1,234.00`); inputs are not validated.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    // "{:.2}" always yields two decimals, so the last three bytes are ".dd"
    let (int_part, cents) = fixed.split_at(fixed.len() - 3);
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${sign}{grouped}{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_groups_thousands() {
        assert_eq!(format_usd(75432.00), "$75,432.00");
        assert_eq!(format_usd(1234567.89), "$1,234,567.89");
    }

    #[test]
    fn test_format_usd_small_amounts() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.0), "$999.00");
        assert_eq!(format_usd(1000.0), "$1,000.00");
    }

    #[test]
    fn test_format_usd_rounds_to_cents() {
        assert_eq!(format_usd(1093.764), "$1,093.76");
        assert_eq!(format_usd(4676.784), "$4,676.78");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1234.0), "$-1,234.00");
    }

    #[test]
    fn test_derived_values_are_fixed_ratios() {
        assert_eq!(format_usd(federal_withholding(75432.00)), "$16,595.04");
        assert_eq!(format_usd(social_security_tax(75432.00)), "$4,676.78");
        assert_eq!(format_usd(medicare_tax(75432.00)), "$1,093.76");
        assert_eq!(format_usd(qualified_dividends(5678.00)), "$4,542.40");
        assert_eq!(format_usd(outstanding_principal(12345.00)), "$308,625.00");
    }

    #[test]
    fn test_derived_values_are_deterministic() {
        for _ in 0..3 {
            assert_eq!(federal_withholding(48750.0), 48750.0 * FEDERAL_WITHHOLDING_RATE);
            assert_eq!(qualified_dividends(5678.0), 5678.0 * QUALIFIED_DIVIDEND_SHARE);
        }
    }
}
