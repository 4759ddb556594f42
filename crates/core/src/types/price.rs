//! Money display formatting.
//!
//! All monetary amounts in the engine are [`rust_decimal::Decimal`] values
//! in US dollars; this module owns the one place they are turned into
//! display strings.

use rust_decimal::Decimal;

/// Format an amount for display (e.g., `$19.99`).
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_places() {
        assert_eq!(format_price(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(format_price(Decimal::new(10, 0)), "$10.00");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }
}
