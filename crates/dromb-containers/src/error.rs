use thiserror::Error;

/// Hard failures raised by [`VectorULong`](crate::math::VectorULong) and
/// [`MatrixULong`](crate::math::MatrixULong).
///
/// Out-of-range indexed access is not reported here; it goes through the
/// container's `error_code` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("attempted to divide by zero")]
    DivideByZero,
}

/// Failures raised by [`Rhombus`](crate::rhombus::Rhombus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RhombusError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {0} out of range, allowed values: 0 (d1), 1 (d2), 2 (color)")]
    IndexOutOfRange(usize),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("invalid rhombus format: {0}")]
    Format(String),
}
