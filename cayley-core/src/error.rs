//! Error types for algebra and scalar arithmetic.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("inverse of a zero divisor")]
    ZeroDivisorInverse,

    #[error("denominator is a zero divisor")]
    ZeroDivisorDenominator,

    #[error("scalar division by zero")]
    DivisionByZero,

    #[error("expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid scalar: {0}")]
    InvalidScalar(String),
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;
