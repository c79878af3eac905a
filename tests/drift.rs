//! Regression tests for the drift demonstration at the reference size.
//!
//! The iteration count and increments are engineered so the fixed-point
//! difference lands exactly on the baseline; the binary difference must miss
//! it by a small, bounded amount. That miss is the demonstration.

use driftbench::{Config, Fixed, Harness};

/// `base^exp` by repeated squaring, for an independent closed-form reference
/// that does not share the demonstration's multiplication order.
fn pow_fixed(base: Fixed, exp: u32) -> Fixed {
    let mut result = Fixed::ONE;
    let mut square = base;
    let mut remaining = exp;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square).unwrap();
        }
        square = square.checked_mul(square).unwrap();
        remaining >>= 1;
    }
    result
}

#[test]
fn reference_drift_and_compound_growth() {
    let harness = Harness::new(Config::reference());
    let report = harness.drift().unwrap();
    let expected = Fixed::new(10_000, 0);

    // 30,690,000 additions of 0.93 put the minuend at 28,551,700.00 and the
    // 28,830,000 conditional additions of 0.99 put the subtrahend at
    // 28,541,700.00: the fixed-point track cancels to the baseline exactly.
    assert_eq!(report.expected, expected);
    assert_eq!(report.fixed_difference, expected);

    // The binary track accumulates representation error on every add of the
    // non-dyadic increments; it must drift, but not far.
    assert!(report.binary_difference != expected.to_f64());
    assert!((report.binary_difference - expected.to_f64()).abs() < 1.0);

    // Compound growth: compare both tracks against the closed form
    // 10000 * (1 + 0.0375/12)^60 evaluated in the fixed-point domain.
    let monthly_growth = Fixed::new(1_003_125, 6);
    let closed_form = expected
        .checked_mul(pow_fixed(monthly_growth, 60))
        .unwrap();

    let fixed_distance = report
        .fixed_principal
        .checked_sub(closed_form)
        .unwrap()
        .abs()
        .to_f64();
    let binary_distance = (report.binary_principal - closed_form.to_f64()).abs();

    assert!(fixed_distance < 1e-6, "fixed distance {fixed_distance}");
    assert!(binary_distance < 1e-3, "binary distance {binary_distance}");
    assert!(
        fixed_distance < binary_distance,
        "fixed ({fixed_distance}) should sit closer to the closed form than binary ({binary_distance})"
    );
}

#[test]
fn drift_is_deterministic() {
    let config = Config::quick();
    let first = Harness::new(config.clone()).drift().unwrap();
    let second = Harness::new(config).drift().unwrap();

    assert_eq!(first.fixed_difference, second.fixed_difference);
    assert_eq!(first.binary_difference, second.binary_difference);
    assert_eq!(first.fixed_principal, second.fixed_principal);
    assert_eq!(first.binary_principal, second.binary_principal);
}
