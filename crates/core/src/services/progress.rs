//! Percent-complete figures for financings and goals.
//!
//! A zero denominator yields 0, never NaN or infinity.

/// Share of a financing already paid: `(total - remaining) / total * 100`.
///
/// Not clamped: a remaining balance above the total gives a negative value,
/// a negative remaining balance gives more than 100.
#[must_use]
pub fn financing_progress(total: f64, remaining: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    let percent = (total - remaining) / total * 100.0;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

/// Share of a goal reached: `min(current / target * 100, 100)`.
///
/// Clamped on the upper bound only. A target of zero or below gives 0.
#[must_use]
pub fn goal_progress(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let percent = current / target * 100.0;
    if percent.is_finite() {
        percent.min(100.0)
    } else {
        0.0
    }
}

/// Width of a progress bar fill, in percent. Always within [0, 100].
#[must_use]
pub fn bar_width(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}
