//! Typed form inputs.
//!
//! Each form holds the raw strings a user typed and turns them into a typed
//! request body with `parse`. Parsing checks every field and reports all
//! failures at once in [`ValidationErrors`].

pub mod auth_form;
pub mod category_form;
pub mod financing_form;
pub mod goal_form;
pub mod transaction_form;

use chrono::NaiveDate;

use crate::errors::ValidationErrors;

pub use auth_form::{LoginForm, RegisterForm};
pub use category_form::CategoryForm;
pub use financing_form::{FinancingForm, PaymentForm};
pub use goal_form::{AddToGoalForm, GoalForm};
pub use transaction_form::TransactionForm;

/// Smallest accepted strictly-positive amount (one cent).
pub const MIN_POSITIVE_AMOUNT: f64 = 0.01;

/// Lower bound applied to a parsed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmountBound {
    /// At least one cent
    Positive,
    /// Zero allowed
    NonNegative,
}

/// Trimmed, non-blank text, or a "required" failure.
pub(crate) fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, "is required");
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trimmed text or `None` when blank. Never fails.
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a decimal amount typed as `1234.5`, `1.234,50` or `1,234.50`.
///
/// Only digits, `.`, `,` and a leading sign are accepted. When both
/// separators appear, the last one is the decimal point and the other one
/// groups thousands. A separator repeated on its own groups thousands.
pub(crate) fn parse_amount(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    bound: AmountBound,
) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, "is required");
        return None;
    }

    let value = match normalize_amount(trimmed).and_then(|n| n.parse::<f64>().ok()) {
        Some(v) if v.is_finite() => v,
        _ => {
            errors.push(field, format!("'{trimmed}' is not a valid amount"));
            return None;
        }
    };

    match bound {
        AmountBound::Positive if value < MIN_POSITIVE_AMOUNT => {
            errors.push(field, format!("must be at least {MIN_POSITIVE_AMOUNT}"));
            None
        }
        AmountBound::NonNegative if value < 0.0 => {
            errors.push(field, "must not be negative");
            None
        }
        _ => Some(value),
    }
}

/// Rewrite a typed amount as `[-]digits[.digits]`, or `None` if it is
/// malformed or ambiguous.
fn normalize_amount(input: &str) -> Option<String> {
    let (sign, body) = match input.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", input.strip_prefix('+').unwrap_or(input)),
    };
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }

    let dots = body.matches('.').count();
    let commas = body.matches(',').count();
    let (decimal, group) = match (dots, commas) {
        (0, 0) => (None, None),
        (_, 0) if dots == 1 => (Some('.'), None),
        (0, _) if commas == 1 => (Some(','), None),
        (_, 0) => (None, Some('.')),
        (0, _) => (None, Some(',')),
        _ => {
            let last_dot = body.rfind('.')?;
            let last_comma = body.rfind(',')?;
            if last_dot > last_comma {
                (Some('.'), Some(','))
            } else {
                (Some(','), Some('.'))
            }
        }
    };

    let (integer, fraction) = match decimal {
        Some(sep) => {
            let (int_part, frac_part) = body.rsplit_once(sep)?;
            if frac_part.is_empty() || !frac_part.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            (int_part, Some(frac_part))
        }
        None => (body, None),
    };

    let digits = match group {
        Some(sep) => {
            let groups: Vec<&str> = integer.split(sep).collect();
            let first_ok = (1..=3).contains(&groups[0].len());
            let rest_ok = groups[1..].iter().all(|g| g.len() == 3);
            let all_digits = groups.iter().all(|g| g.chars().all(|c| c.is_ascii_digit()));
            if !(first_ok && rest_ok && all_digits) {
                return None;
            }
            groups.concat()
        }
        None if integer.chars().all(|c| c.is_ascii_digit()) && !integer.is_empty() => {
            integer.to_string()
        }
        None => return None,
    };

    Some(match fraction {
        Some(frac) => format!("{sign}{digits}.{frac}"),
        None => format!("{sign}{digits}"),
    })
}

/// Parse an ISO `YYYY-MM-DD` date.
pub(crate) fn parse_date(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, "is required");
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, format!("'{trimmed}' is not a date (expected YYYY-MM-DD)"));
            None
        }
    }
}
