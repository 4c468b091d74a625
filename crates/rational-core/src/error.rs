//! Error types for rational-method computations.

use thiserror::Error;

/// Rejected input to a basin or flood computation.
///
/// Every variant is a precondition violation: nothing is retried and no
/// partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Curve has no points")]
    EmptyCurve,

    #[error("Curve needs at least {required} points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("Curve has {times} times but {values} values")]
    LengthMismatch { times: usize, values: usize },

    #[error("Curve time decreases at index {index}")]
    UnorderedCurve { index: usize },

    #[error("Non-finite {name} at index {index}")]
    NonFinite { name: &'static str, index: usize },

    #[error("Shapes have zero total area")]
    ZeroShapeArea,

    #[error("Unknown zero-time policy '{0}', expected 'zero-flow' or 'omit'")]
    UnknownPolicy(String),
}

/// Result type alias for rational-method operations.
pub type Result<T> = std::result::Result<T, Error>;
