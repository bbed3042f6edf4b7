//! Two-decimal rounding shared by every derived figure.
//!
//! Rule: round half away from zero, applied to the shortest decimal string that
//! round-trips the `f64`. So `54.995` becomes `55.00` even though its binary
//! value sits a hair below the midpoint, and `-54.995` becomes `-55.00`.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub fn round2(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    let rounded = match Decimal::from_str(&x.to_string()) {
        // back through text so the result is the f64 nearest the rounded decimal
        Ok(d) => d
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse::<f64>()
            .unwrap_or(0.0),
        // Outside Decimal's range; f64::round is also half-away-from-zero.
        Err(_) => (x * 100.0).round() / 100.0,
    };
    // no negative zero in reports
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `part / whole * 100`, rounded; 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}
