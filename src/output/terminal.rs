//! Terminal formatting of campaign results.
//!
//! Every value is rendered to a fixed number of fractional digits so the
//! three tracks line up digit for digit. The binary track is round-tripped
//! through its shortest exact decimal text first: Rust's `f64` display emits
//! the shortest decimal string that parses back to the same double, so the
//! fixed-digit rounding below starts from everything the double actually
//! carries and adds no formatting error of its own.

use colored::Colorize;

use crate::harness::AlgorithmReport;
use crate::numeric::Fixed;
use crate::statistics::drift::DriftReport;

/// Format one strategy's block: a label line, the three track lines and the
/// elapsed wall time.
pub fn format_report(report: &AlgorithmReport, fractional_digits: u32) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", format!("{}:", report.kind.label()).bold()));
    output.push_str(&format!(
        "Full:     {}\n",
        format_fixed(report.result.full, fractional_digits)
    ));
    output.push_str(&format!(
        "10-digit: {}\n",
        format_fixed(report.result.truncated, fractional_digits)
    ));
    output.push_str(&format!(
        "double:   {}\n",
        format_binary(report.result.binary, fractional_digits)
    ));
    output.push_str(&format!(
        "{}\n",
        format!("elapsed:  {:.3?}", report.elapsed).dimmed()
    ));
    output
}

/// Format the drift demonstration block.
///
/// The fixed difference is colored by whether it landed exactly on the
/// expected value; the binary difference is highlighted when it drifted,
/// which it is expected to.
pub fn format_drift(report: &DriftReport, fractional_digits: u32) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Drift:".bold()));
    output.push_str(&format!(
        "Expected difference: {}\n",
        format_fixed(report.expected, fractional_digits)
    ));

    let fixed_text = format_fixed(report.fixed_difference, fractional_digits);
    let fixed_colored = if report.fixed_difference == report.expected {
        fixed_text.green()
    } else {
        fixed_text.yellow()
    };
    output.push_str(&format!("Fixed difference:    {fixed_colored}\n"));

    let binary_text = format_binary(report.binary_difference, fractional_digits);
    let binary_colored = if report.binary_difference == report.expected.to_f64() {
        binary_text.green()
    } else {
        binary_text.yellow()
    };
    output.push_str(&format!("double difference:   {binary_colored}\n"));

    output.push_str(&format!(
        "Fixed principal:     {}\n",
        format_fixed(report.fixed_principal, fractional_digits)
    ));
    output.push_str(&format!(
        "double principal:    {}\n",
        format_binary(report.binary_principal, fractional_digits)
    ));
    output
}

/// Render a fixed-point value with exactly `fractional_digits` digits after
/// the point, rounding half to even when the value carries more.
pub fn format_fixed(value: Fixed, fractional_digits: u32) -> String {
    let rounded = value.round_dp(fractional_digits);
    let text = rounded.to_string();
    let width = fractional_digits as usize;
    if width == 0 {
        return text;
    }
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{int_part}.{frac_part:0<width$}"),
        None => format!("{text}.{:0<width$}", ""),
    }
}

/// Render a binary floating-point value at the same fixed precision, going
/// through its shortest exact decimal text.
pub fn format_binary(value: f64, fractional_digits: u32) -> String {
    let text = value.to_string();
    match text.parse::<Fixed>() {
        Ok(decimal) => format_fixed(decimal, fractional_digits),
        // Non-finite values have no decimal rendition; show them as-is.
        Err(_) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Triple;
    use crate::statistics::accumulate::AlgorithmKind;
    use std::time::Duration;

    #[test]
    fn test_format_fixed_pads_to_width() {
        assert_eq!(format_fixed(Fixed::new(15, 1), 10), "1.5000000000");
        assert_eq!(format_fixed(Fixed::new(10_000, 0), 10), "10000.0000000000");
        assert_eq!(format_fixed(Fixed::new(-93, 2), 4), "-0.9300");
    }

    #[test]
    fn test_format_fixed_rounds_excess_digits() {
        let value = Fixed::new(100_000_000_015, 11);
        assert_eq!(format_fixed(value, 10), "1.0000000002");
        assert_eq!(format_fixed(value, 0), "1");
    }

    #[test]
    fn test_format_binary_round_trips() {
        assert_eq!(format_binary(0.1, 10), "0.1000000000");
        assert_eq!(format_binary(10_000.0, 2), "10000.00");
        assert_eq!(format_binary(f64::NAN, 10), "NaN");
    }

    #[test]
    fn test_format_binary_large_magnitude() {
        // Sums of the reference dataset land in the quadrillions; the
        // shortest double text stays in plain notation.
        let text = format_binary(5_150_000_000_123_456.0, 10);
        assert_eq!(text, "5150000000123456.0000000000");
    }

    #[test]
    fn test_report_block_labels() {
        let report = AlgorithmReport {
            kind: AlgorithmKind::Sums,
            result: Triple::new(Fixed::from(6u64), Fixed::from(6u64), 6.0),
            elapsed: Duration::from_millis(1),
        };
        let block = format_report(&report, 10);
        assert!(block.contains("Sums:"));
        assert!(block.contains("Full:     6.0000000000"));
        assert!(block.contains("10-digit: 6.0000000000"));
        assert!(block.contains("double:   6.0000000000"));
        assert!(block.contains("elapsed:"));
    }
}
