//! Closed-form birthday-paradox probability

use crate::consts::DAYS_IN_YEAR;

/// Chance (percent, two decimals) that at least two of `n` people share a birthday
///
/// Above 365 people a match is certain by pigeonhole.
pub fn probability_of_any_match(n: u32) -> f64 {
    let days = f64::from(DAYS_IN_YEAR);
    if n > u32::from(DAYS_IN_YEAR) {
        return 100.0;
    }

    let p_no_match: f64 = (0..n).map(|i| (days - f64::from(i)) / days).product();
    round2((1.0 - p_no_match) * 100.0)
}

/// Displayed label, e.g. "50.73%"
pub fn probability_label(n: u32) -> String {
    format!("{:.2}%", probability_of_any_match(n))
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
