//! Error types for quantity construction and arithmetic.

use crate::unit::Operation;

/// Result type for quantity operations
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Error type for quantity operations
///
/// Every failure is synchronous and final: nothing is retried, recovered,
/// or logged. Callers get the error on the operation that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    /// A construction or operand value violated a structural requirement
    /// (NaN at construction, non-finite operand in arithmetic).
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operand's unit category has opted out of the requested
    /// arithmetic operation.
    #[error("The {category} category does not support {operation}")]
    UnsupportedOperation {
        /// Category that rejected the operation.
        category: &'static str,
        /// The rejected operation.
        operation: Operation,
    },

    /// The divisor's base-representation value is exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
