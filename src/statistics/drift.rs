//! The drift demonstration.
//!
//! A self-contained illustration, independent of the dataset: accumulate a
//! fixed increment into a minuend every iteration and a second increment into
//! a subtrahend on most iterations, in parallel fixed-point and binary
//! tracks. The reference iteration count and increments are engineered so the
//! additions cancel and the difference is analytically `10000`. The
//! fixed-point track lands on it exactly, while the binary track drifts by a
//! small nonzero amount. The difference is then compounded monthly for five years
//! to show how the drift propagates through multiplicative growth.

use crate::config::Config;
use crate::constants::{DRIFT_BASELINE, MONTHS_PER_YEAR};
use crate::numeric::{Fixed, NumericResult};

/// Outcome of the drift demonstration, both tracks side by side.
#[derive(Debug, Clone, Copy)]
pub struct DriftReport {
    /// The analytically expected difference (the starting minuend).
    pub expected: Fixed,

    /// Minuend minus subtrahend in the fixed-point track.
    pub fixed_difference: Fixed,

    /// Minuend minus subtrahend in the binary track.
    pub binary_difference: f64,

    /// The fixed-point difference after compound monthly growth.
    pub fixed_principal: Fixed,

    /// The binary difference after compound monthly growth.
    pub binary_principal: f64,
}

/// Run the demonstration with the configured iteration count, increments,
/// compounding rounds and nominal rate.
///
/// # Errors
///
/// Propagates [`crate::NumericError::Overflow`] should the accumulators leave
/// the fixed-point envelope; the reference parameters stay well inside it.
pub fn run(config: &Config) -> NumericResult<DriftReport> {
    let increment = config.drift_increment;
    let conditional = config.drift_conditional_increment;
    let increment_f64 = increment.to_f64();
    let conditional_f64 = conditional.to_f64();

    let mut fixed_minuend = DRIFT_BASELINE;
    let mut fixed_subtrahend = Fixed::ZERO;
    let mut binary_minuend = DRIFT_BASELINE.to_f64();
    let mut binary_subtrahend = 0f64;

    for index in 0..config.drift_iterations {
        fixed_minuend = fixed_minuend.checked_add(increment)?;
        binary_minuend += increment_f64;
        if index % 33 != 0 && index % 32 != 0 {
            fixed_subtrahend = fixed_subtrahend.checked_add(conditional)?;
            binary_subtrahend += conditional_f64;
        }
    }

    let fixed_difference = fixed_minuend.checked_sub(fixed_subtrahend)?;
    let binary_difference = binary_minuend - binary_subtrahend;

    let months = Fixed::from(MONTHS_PER_YEAR);
    let fixed_growth = Fixed::ONE.checked_add(config.nominal_annual_rate.checked_div(months)?)?;
    let binary_growth = 1.0 + config.nominal_annual_rate.to_f64() / MONTHS_PER_YEAR as f64;

    let mut fixed_principal = fixed_difference;
    let mut binary_principal = binary_difference;
    for _ in 0..config.compound_rounds {
        fixed_principal = fixed_principal.checked_mul(fixed_growth)?;
        binary_principal *= binary_growth;
    }

    Ok(DriftReport {
        expected: DRIFT_BASELINE,
        fixed_difference,
        binary_difference,
        fixed_principal,
        binary_principal,
    })
}
