// 💵 Currency formatting
// "$" + two decimals + a comma every three integer digits

/// Format an amount as dollars, e.g. `1234567.0` → `"$1,234,567.00"`.
///
/// Rounds to two decimals. A negative sign stays after the symbol
/// (`"$-1,234.00"`); non-finite values are printed as-is (`"$inf"`).
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let fixed = format!("{:.2}", amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("${}{}.{}", sign, group_thousands(integer), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn test_format_million() {
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_half() {
        assert_eq!(format_money(999.5), "$999.50");
    }

    #[test]
    fn test_format_rounds_to_cents() {
        assert_eq!(format_money(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_group_boundaries() {
        assert_eq!(format_money(100.0), "$100.00");
        assert_eq!(format_money(1000.0), "$1,000.00");
        assert_eq!(format_money(12_345.0), "$12,345.00");
        assert_eq!(format_money(123_456.0), "$123,456.00");
    }

    #[test]
    fn test_format_negative_and_non_finite() {
        assert_eq!(format_money(-1234.0), "$-1,234.00");
        assert_eq!(format_money(f64::INFINITY), "$inf");
    }
}
