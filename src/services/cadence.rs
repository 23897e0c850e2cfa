//! Cadence normalization
//!
//! Converts a recurring (amount, cadence) pair into its weekly equivalent,
//! in fractional cents. Rounding to whole cents happens later, at the plan
//! boundary.

use crate::config::CadencePolicy;
use crate::error::{StashError, StashResult};
use crate::models::{Cadence, Money};

/// Weeks per month used for every monthly and semimonthly conversion
pub const WEEKS_PER_MONTH: f64 = 4.345;

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Weekly-equivalent of `amount`, in fractional cents.
///
/// Unrecognized cadences pass the amount through unchanged.
pub fn normalize_to_weekly(amount: Money, cadence: &Cadence) -> f64 {
    let cents = amount.cents_f64();
    match cadence {
        Cadence::Weekly => cents,
        Cadence::Biweekly => cents / 2.0,
        Cadence::Semimonthly => cents * 2.0 / WEEKS_PER_MONTH,
        Cadence::Monthly => cents / WEEKS_PER_MONTH,
        Cadence::Annual => cents / WEEKS_PER_YEAR,
        Cadence::Other(_) => cents,
    }
}

/// Like [`normalize_to_weekly`], but lets the caller choose what happens to an
/// unrecognized cadence. `line` names the input line for logs and errors.
pub fn normalize_checked(
    amount: Money,
    cadence: &Cadence,
    policy: CadencePolicy,
    line: &str,
) -> StashResult<f64> {
    if let Cadence::Other(raw) = cadence {
        match policy {
            CadencePolicy::Strict => return Err(StashError::invalid_cadence(raw, line)),
            CadencePolicy::Lenient => {
                tracing::warn!(
                    cadence = %raw,
                    line,
                    "unrecognized cadence, treating amount as weekly"
                );
            }
        }
    }

    Ok(normalize_to_weekly(amount, cadence))
}
