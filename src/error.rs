use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Errors raised by vector construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("index {index} is out of range for a {dimensions}-dimensional vector")]
    Index { index: usize, dimensions: usize },

    #[error("unknown axis {0:?}")]
    UnknownAxis(String),

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("division by zero")]
    DivisionByZero,

    #[error("interpolation angle {omega} degrees has a zero sine")]
    DegenerateInterpolation { omega: f64 },

    #[error("{operation} is not supported for {dimensions}-dimensional vectors")]
    Unsupported {
        operation: &'static str,
        dimensions: usize,
    },
}

/// Errors related to the clock and its timer registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("timer not found")]
    TimerNotFound,
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
