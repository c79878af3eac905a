//! Configuration for a comparison campaign.

use crate::constants;
use crate::numeric::{Fixed, MAX_SCALE};

/// Configuration options for a [`Harness`](crate::Harness) run.
///
/// Everything here is a compiled-in constant in the reference campaign; the
/// struct exists so the dataset builder, the accumulation strategies and the
/// drift demonstration receive their parameters explicitly instead of
/// reaching for globals, and so tests can run the identical machinery at a
/// fraction of the size.
#[derive(Debug, Clone)]
pub struct Config {
    // =========================================================================
    // Dataset
    // =========================================================================
    /// Number of samples to draw. The whole population is held in memory.
    /// Default: 100,000,000.
    pub sample_count: usize,

    /// Inclusive lower bound of the sampling range. Default: 100,000.
    pub range_lower: Fixed,

    /// Exclusive upper bound of the sampling range. Default: 100,000,000.
    pub range_upper: Fixed,

    /// Storage precision in fractional digits. The truncated track rounds
    /// every input to this grid, and reported values are displayed at it.
    /// Default: 10.
    pub fractional_digits: u32,

    /// Fractional digits carried by freshly drawn samples. Must be at least
    /// `fractional_digits`, otherwise the truncated track would observe
    /// nothing. Default: 20.
    pub sample_scale: u32,

    // =========================================================================
    // Drift demonstration
    // =========================================================================
    /// Iterations of the forward add/subtract loop. Default: 30,690,000.
    pub drift_iterations: u64,

    /// Increment added to the minuend every iteration. Default: 0.93.
    pub drift_increment: Fixed,

    /// Increment added to the subtrahend on iterations whose index is
    /// divisible by neither 33 nor 32. Default: 0.99.
    pub drift_conditional_increment: Fixed,

    /// Compounding rounds applied to the drift difference. Default: 60.
    pub compound_rounds: u32,

    /// Nominal annual growth rate, divided by twelve per round.
    /// Default: 0.0375.
    pub nominal_annual_rate: Fixed,
}

impl Default for Config {
    fn default() -> Self {
        Self::reference()
    }
}

impl Config {
    /// The reference campaign: the full-size run the harness exists to
    /// reproduce, digit for digit.
    pub fn reference() -> Self {
        Self {
            sample_count: constants::DEFAULT_SAMPLE_COUNT,
            range_lower: constants::RANGE_LOWER,
            range_upper: constants::RANGE_UPPER,
            fractional_digits: constants::STORAGE_FRACTIONAL_DIGITS,
            sample_scale: constants::SAMPLE_SCALE,
            drift_iterations: constants::DRIFT_ITERATIONS,
            drift_increment: constants::DRIFT_INCREMENT,
            drift_conditional_increment: constants::DRIFT_CONDITIONAL_INCREMENT,
            compound_rounds: constants::COMPOUND_ROUNDS,
            nominal_annual_rate: constants::NOMINAL_ANNUAL_RATE,
        }
    }

    /// A scaled-down campaign for tests and benches: 1,000 samples and a
    /// short drift loop. Note the drift difference no longer lands exactly
    /// on the baseline at this size; only the reference iteration count
    /// cancels.
    pub fn quick() -> Self {
        Self {
            sample_count: 1_000,
            drift_iterations: 33_000,
            ..Self::reference()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the number of samples to draw.
    pub fn sample_count(mut self, count: usize) -> Self {
        assert!(count > 0, "sample_count must be positive");
        self.sample_count = count;
        self
    }

    /// Set the sampling range `[lower, upper)`.
    pub fn range(mut self, lower: Fixed, upper: Fixed) -> Self {
        assert!(lower < upper, "range must satisfy lower < upper");
        self.range_lower = lower;
        self.range_upper = upper;
        self
    }

    /// Set the storage precision in fractional digits.
    pub fn fractional_digits(mut self, digits: u32) -> Self {
        assert!(
            digits <= MAX_SCALE,
            "fractional_digits must not exceed the representation"
        );
        self.fractional_digits = digits;
        self
    }

    /// Set the fractional digits carried by drawn samples.
    pub fn sample_scale(mut self, scale: u32) -> Self {
        assert!(
            scale <= MAX_SCALE,
            "sample_scale must not exceed the representation"
        );
        self.sample_scale = scale;
        self
    }

    /// Set the drift loop iteration count.
    pub fn drift_iterations(mut self, iterations: u64) -> Self {
        assert!(iterations > 0, "drift_iterations must be positive");
        self.drift_iterations = iterations;
        self
    }

    /// Set the number of compounding rounds.
    pub fn compound_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "compound_rounds must be positive");
        self.compound_rounds = rounds;
        self
    }

    /// Check that the configuration is internally consistent.
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_count == 0 {
            return Err("sample_count must be positive".to_string());
        }
        if self.range_lower >= self.range_upper {
            return Err("range must satisfy lower < upper".to_string());
        }
        if self.sample_scale > MAX_SCALE {
            return Err("sample_scale exceeds the representation".to_string());
        }
        if self.fractional_digits > self.sample_scale {
            return Err("fractional_digits must not exceed sample_scale".to_string());
        }
        if self.range_lower.to_units(self.sample_scale).is_err()
            || self.range_upper.to_units(self.sample_scale).is_err()
        {
            return Err("range bounds must be exact at sample_scale".to_string());
        }
        if self.drift_iterations == 0 {
            return Err("drift_iterations must be positive".to_string());
        }
        if self.compound_rounds == 0 {
            return Err("compound_rounds must be positive".to_string());
        }
        Ok(())
    }
}
