//! The four accumulation strategies.
//!
//! Each strategy walks the dataset once and carries three accumulators in
//! parallel. For every full-precision sample it derives:
//! - `stored`: the sample rounded to the storage precision, modeling what a
//!   10-fractional-digit column would have persisted
//! - a binary floating-point observation of the sample
//!
//! The binary observation is *not* derived uniformly: the running-sums
//! strategy converts the full-precision sample, while the three mean
//! strategies convert the already-rounded `stored` value. The divergence this
//! causes between the binary columns is part of the comparison itself, so the
//! asymmetry is load-bearing; do not regularize it. See
//! `test_binary_track_sources_differ`.

use crate::dataset::Dataset;
use crate::numeric::{Fixed, NumericResult};
use crate::result::Triple;

/// Identifies one of the four accumulation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Plain running totals; reports raw sums, not means.
    Sums,
    /// Incrementally reweighted mean, divided by the running count each step.
    CumulativeMean,
    /// Per-element division by the total count before summation.
    PartialMean,
    /// Summation followed by a single final division.
    SimpleMean,
}

impl AlgorithmKind {
    /// Every strategy, in reporting order.
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Sums,
        AlgorithmKind::CumulativeMean,
        AlgorithmKind::PartialMean,
        AlgorithmKind::SimpleMean,
    ];

    /// Human-readable block label.
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Sums => "Sums",
            AlgorithmKind::CumulativeMean => "Cumulative Means",
            AlgorithmKind::PartialMean => "Partial Means",
            AlgorithmKind::SimpleMean => "Simple Means",
        }
    }
}

/// Run one strategy over the dataset.
pub fn run(kind: AlgorithmKind, dataset: &Dataset, fractional_digits: u32) -> NumericResult<Triple> {
    match kind {
        AlgorithmKind::Sums => sums(dataset, fractional_digits),
        AlgorithmKind::CumulativeMean => cumulative_mean(dataset, fractional_digits),
        AlgorithmKind::PartialMean => partial_mean(dataset, fractional_digits),
        AlgorithmKind::SimpleMean => simple_mean(dataset, fractional_digits),
    }
}

/// Plain running totals: `acc += x` in all three tracks.
///
/// The binary track observes the full-precision samples directly.
pub fn sums(dataset: &Dataset, fractional_digits: u32) -> NumericResult<Triple> {
    let mut full_sum = Fixed::ZERO;
    let mut stored_sum = Fixed::ZERO;
    let mut binary_sum = 0f64;

    for &full in dataset.iter() {
        let stored = full.round_dp(fractional_digits);
        let binary = full.to_f64();

        full_sum = full_sum.checked_add(full)?;
        stored_sum = stored_sum.checked_add(stored)?;
        binary_sum += binary;
    }

    Ok(Triple::new(full_sum, stored_sum, binary_sum))
}

/// Incrementally reweighted mean.
///
/// For the i-th sample (1-indexed), `mean = mean * (i-1) / i + x / i`; the
/// first sample seeds the mean directly. The two divisions every step make
/// this the strategy with the most rounding opportunities, which is why it is
/// numerically distinct from summing and dividing once.
pub fn cumulative_mean(dataset: &Dataset, fractional_digits: u32) -> NumericResult<Triple> {
    let mut full_mean = Fixed::ZERO;
    let mut stored_mean = Fixed::ZERO;
    let mut binary_mean = 0f64;

    for (index, &full) in dataset.iter().enumerate() {
        let stored = full.round_dp(fractional_digits);
        let binary = stored.to_f64();

        let count = (index + 1) as u64;
        if count == 1 {
            full_mean = full;
            stored_mean = stored;
            binary_mean = binary;
        } else {
            let previous = Fixed::from(count - 1);
            let current = Fixed::from(count);
            full_mean = full_mean
                .checked_mul(previous)?
                .checked_div(current)?
                .checked_add(full.checked_div(current)?)?;
            stored_mean = stored_mean
                .checked_mul(previous)?
                .checked_div(current)?
                .checked_add(stored.checked_div(current)?)?;
            binary_mean =
                binary_mean * (count - 1) as f64 / count as f64 + binary / count as f64;
        }
    }

    Ok(Triple::new(full_mean, stored_mean, binary_mean))
}

/// Per-element division before summation: `acc += x / N` with N fixed.
///
/// Every division can round before its contribution is accumulated.
pub fn partial_mean(dataset: &Dataset, fractional_digits: u32) -> NumericResult<Triple> {
    let count = Fixed::from(dataset.len() as u64);
    let count_f64 = dataset.len() as f64;

    let mut full_mean = Fixed::ZERO;
    let mut stored_mean = Fixed::ZERO;
    let mut binary_mean = 0f64;

    for &full in dataset.iter() {
        let stored = full.round_dp(fractional_digits);
        let binary = stored.to_f64();

        full_mean = full_mean.checked_add(full.checked_div(count)?)?;
        stored_mean = stored_mean.checked_add(stored.checked_div(count)?)?;
        binary_mean += binary / count_f64;
    }

    Ok(Triple::new(full_mean, stored_mean, binary_mean))
}

/// Summation followed by one division: `(Σx) / N`.
///
/// The single late division makes this the cleanest strategy; its sums are
/// identical to [`sums`] in the fixed-point tracks.
pub fn simple_mean(dataset: &Dataset, fractional_digits: u32) -> NumericResult<Triple> {
    let count = Fixed::from(dataset.len() as u64);
    let count_f64 = dataset.len() as f64;

    let mut full_sum = Fixed::ZERO;
    let mut stored_sum = Fixed::ZERO;
    let mut binary_sum = 0f64;

    for &full in dataset.iter() {
        let stored = full.round_dp(fractional_digits);
        let binary = stored.to_f64();

        full_sum = full_sum.checked_add(full)?;
        stored_sum = stored_sum.checked_add(stored)?;
        binary_sum += binary;
    }

    Ok(Triple::new(
        full_sum.checked_div(count)?,
        stored_sum.checked_div(count)?,
        binary_sum / count_f64,
    ))
}
