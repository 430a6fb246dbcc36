//! Price formatting

/// Format a whole-unit amount with dot thousands separators.
///
/// `format_price(150_000, "$")` gives `"$150.000"`.
pub fn format_price(amount: u64, symbol: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{symbol}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_price(0, "$"), "$0");
        assert_eq!(format_price(999, "$"), "$999");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_price(1_000, "$"), "$1.000");
        assert_eq!(format_price(150_000, "$"), "$150.000");
        assert_eq!(format_price(1_234_567, "$"), "$1.234.567");
    }

    #[test]
    fn test_format_custom_symbol() {
        assert_eq!(format_price(25_000, "COP "), "COP 25.000");
    }
}
