//! Rupiah formatting
//!
//! Renders whole-Rupiah amounts in the Indonesian convention: "Rp" prefix,
//! dot as the thousands separator, no decimal part. Negative amounts carry a
//! leading minus before the prefix.

use crate::models::Money;

/// Format an amount as Indonesian Rupiah, e.g. `Rp1.500.000`
pub fn format_rupiah(amount: Money) -> String {
    let rupiah = amount.rupiah();
    let digits = rupiah.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rupiah < 0 {
        format!("-Rp{}", grouped)
    } else {
        format!("Rp{}", grouped)
    }
}

/// Format a signed amount with an explicit `+` on positive values, for
/// event impacts and deltas
pub fn format_rupiah_signed(amount: Money) -> String {
    if amount.is_positive() {
        format!("+{}", format_rupiah(amount))
    } else {
        format_rupiah(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(Money::from_rupiah(0)), "Rp0");
        assert_eq!(format_rupiah(Money::from_rupiah(500)), "Rp500");
        assert_eq!(format_rupiah(Money::from_rupiah(1_500)), "Rp1.500");
        assert_eq!(format_rupiah(Money::from_rupiah(75_000)), "Rp75.000");
        assert_eq!(format_rupiah(Money::from_rupiah(1_500_000)), "Rp1.500.000");
        assert_eq!(
            format_rupiah(Money::from_rupiah(4_800_000_000)),
            "Rp4.800.000.000"
        );
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_rupiah(Money::from_rupiah(-800_000)), "-Rp800.000");
        assert_eq!(format_rupiah(Money::from_rupiah(-1)), "-Rp1");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(
            format_rupiah_signed(Money::from_rupiah(500_000)),
            "+Rp500.000"
        );
        assert_eq!(
            format_rupiah_signed(Money::from_rupiah(-250_000)),
            "-Rp250.000"
        );
        assert_eq!(format_rupiah_signed(Money::zero()), "Rp0");
    }
}
