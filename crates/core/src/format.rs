//! Locale formatting seam.
//!
//! The host display layer owns currency and date rendering; the engine
//! only ever formats through this trait so feed subtitles, detail fields,
//! and exports match what the console shows elsewhere.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formatting hooks supplied by the host.
pub trait LocaleFormat {
    /// Formats a monetary amount for display.
    fn amount(&self, amount: Decimal) -> String;

    /// Formats a date for display.
    fn date(&self, date: NaiveDate) -> String;
}

/// en-US reference formatter (`$1,234.56`, `03/20/2025`).
///
/// Used by the tests and the demo host; real hosts supply their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnUs;

impl LocaleFormat for EnUs {
    fn amount(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp(2);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let unsigned = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        format!("{sign}${grouped}.{frac_part}")
    }

    fn date(&self, date: NaiveDate) -> String {
        date.format("%m/%d/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_grouping() {
        let fmt = EnUs;
        assert_eq!(fmt.amount(dec!(0)), "$0.00");
        assert_eq!(fmt.amount(dec!(999)), "$999.00");
        assert_eq!(fmt.amount(dec!(1234.5)), "$1,234.50");
        assert_eq!(fmt.amount(dec!(1234567.89)), "$1,234,567.89");
    }

    #[test]
    fn test_amount_rounds_to_cents() {
        let fmt = EnUs;
        assert_eq!(fmt.amount(dec!(10.005)), "$10.00");
        assert_eq!(fmt.amount(dec!(10.015)), "$10.02");
    }

    #[test]
    fn test_negative_amount() {
        let fmt = EnUs;
        assert_eq!(fmt.amount(dec!(-1500)), "-$1,500.00");
    }

    #[test]
    fn test_date_format() {
        let fmt = EnUs;
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert_eq!(fmt.date(date), "03/20/2025");
    }
}
