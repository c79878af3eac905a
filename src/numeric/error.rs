//! Error types for fixed-point arithmetic.

/// Error returned when a fixed-point operation cannot produce a value.
///
/// Precision loss is *not* an error: when a result carries more fractional
/// digits than the representation can hold alongside its integer digits, the
/// excess digits are rounded away silently, because observing exactly that
/// loss is what the harness exists for. Errors are reserved for results that
/// cannot be represented at any precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumericError {
    /// The magnitude of a result exceeds the 96-bit mantissa capacity even
    /// at scale zero. The reference ranges and counts are chosen to stay
    /// within bounds, so hitting this means the configuration is out of the
    /// representation's envelope.
    Overflow,

    /// Division by a zero divisor.
    DivideByZero,

    /// A textual or rescaled value has no exact fixed-point representation,
    /// such as malformed digits in a parsed string or a lossy down-scaling
    /// where an exact one was required.
    Unrepresentable,
}

impl std::fmt::Display for NumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow => write!(f, "fixed-point overflow: magnitude exceeds the 96-bit capacity"),
            Self::DivideByZero => write!(f, "fixed-point division by zero"),
            Self::Unrepresentable => write!(f, "value has no exact fixed-point representation"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type for fixed-point arithmetic.
pub type NumericResult<T> = Result<T, NumericError>;
