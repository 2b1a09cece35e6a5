//! Unit types and traits.

use crate::error::{MeasureError, MeasureResult};
use core::fmt::{Debug, Display, Formatter, Result};

/// Trait implemented by every **unit category** type.
///
/// A category is a closed enum of unit variants for one physical dimension
/// (length, weight, volume, temperature). Each variant knows how to move a
/// magnitude to and from the category's implicit base representation:
///
/// * *Linear* categories convert through a single multiplicative factor
///   (`to_base(v) = v * factor`). Derive these with `#[derive(Unit)]`.
/// * *Affine* categories (temperature) convert through per-variant
///   offset/scale formulas and implement the trait by hand. Conversion
///   between two non-base variants always composes `to_base` then
///   `from_base`; there is no single-step shortcut.
///
/// [`Quantity`](crate::Quantity) stays ignorant of which kind of rule a
/// category uses; it only ever calls `to_base`/`from_base`.
///
/// # Invariants
///
/// - `from_base(to_base(v)) == v` for all finite `v`, up to floating-point
///   epsilon.
/// - `name` is a display label with no effect on arithmetic.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Human-readable category tag (e.g. `"length"`), used in error messages.
    const CATEGORY: &'static str;

    /// Printable unit label (e.g. `"ft"`), shown by [`core::fmt::Display`].
    fn name(self) -> &'static str;

    /// Converts a magnitude in this unit to the category base representation.
    fn to_base(self, value: f64) -> f64;

    /// Converts a magnitude in the category base representation to this unit.
    fn from_base(self, base: f64) -> f64;

    /// Whether this category participates in arithmetic (add, subtract, divide).
    ///
    /// Defaults to `true`. Temperature opts out: summing readings on an
    /// absolute scale is physically meaningless in a way length addition
    /// is not.
    fn supports_arithmetic(self) -> bool {
        true
    }

    /// Rejects `operation` when the category has opted out of arithmetic.
    ///
    /// This hook is the single place the capability is enforced; call sites
    /// never re-check [`Unit::supports_arithmetic`] themselves.
    fn validate_operation(self, operation: Operation) -> MeasureResult<()> {
        if self.supports_arithmetic() {
            Ok(())
        } else {
            Err(MeasureError::UnsupportedOperation {
                category: Self::CATEGORY,
                operation,
            })
        }
    }
}

/// Arithmetic operation kinds gated by [`Unit::validate_operation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Sum of two quantities.
    Add,
    /// Difference of two quantities.
    Subtract,
    /// Ratio of two quantities.
    Divide,
}

impl Operation {
    /// Applies the operation to two base-representation magnitudes.
    ///
    /// The divide-by-zero check runs here, on the normalized base value: a
    /// degenerate unit definition could map a non-zero magnitude onto a
    /// zero base value, so the raw input is never what gets tested.
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> MeasureResult<f64> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Divide => {
                if rhs == 0.0 {
                    Err(MeasureError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let label = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Divide => "division",
        };
        f.write_str(label)
    }
}
