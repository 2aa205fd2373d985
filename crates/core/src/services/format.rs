//! Display formatting for amounts, dates and percentages.
//!
//! The locale is fixed to Brazilian Portuguese (`pt-BR`, currency BRL).

use chrono::{Datelike, NaiveDate};

/// Shown for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const CURRENCY_PREFIX: &str = "R$\u{a0}";

const MONTH_LABELS: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Format an amount as Brazilian currency: `R$ 1.234,50`.
///
/// Two fraction digits, `.` between thousands, `,` before the cents and a
/// non-breaking space after the symbol. Negative amounts get a leading `-`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return format!("{CURRENCY_PREFIX}NaN");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_PREFIX}∞");
    }

    let cents = (value.abs() * 100.0).round() as u128;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let integer = group_thousands(cents / 100);
    let fraction = cents % 100;

    format!("{sign}{CURRENCY_PREFIX}{integer},{fraction:02}")
}

/// Insert `.` every three digits from the right.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Render an ISO date (`2024-03-07`, optionally followed by `T…`) as `07/03/2024`.
///
/// Unparseable input renders as [`INVALID_DATE`] rather than failing.
#[must_use]
pub fn format_date(iso: &str) -> String {
    let date_part = iso.trim().split('T').next().unwrap_or_default();
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_naive_date(date),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Render a calendar date as `dd/mm/yyyy`.
#[must_use]
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// One fraction digit and a percent sign: `33.3%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Short month label in Portuguese, e.g. `mar.` for March.
#[must_use]
pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_LABELS[date.month0() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_large_numbers() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn every_month_has_a_label() {
        for m in 1..=12 {
            let d = NaiveDate::from_ymd_opt(2024, m, 1).unwrap();
            assert!(month_label(d).ends_with('.'));
        }
    }
}
