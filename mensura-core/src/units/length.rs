//! Length units.
//!
//! The base representation for this category is the **inch**. The imperial
//! factors are exact (`1 ft = 12 in`, `1 yd = 36 in`); the centimetre uses
//! the conventional rounded factor `0.393701 in`.
//!
//! ```rust
//! use mensura_core::length::{Length, LengthUnit};
//!
//! let feet = Length::new(1.0, LengthUnit::Feet).unwrap();
//! let inches = feet.convert_to(LengthUnit::Inches);
//! assert_eq!(inches.value(), 12.0);
//! ```

use crate::Quantity;
use mensura_derive::Unit;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[unit(category = "length")]
pub enum LengthUnit {
    /// Foot (`12 in`).
    #[unit(name = "ft", factor = 12.0)]
    Feet,
    /// Inch, the base unit.
    #[unit(name = "in", factor = 1.0)]
    Inches,
    /// Yard (`36 in`).
    #[unit(name = "yd", factor = 36.0)]
    Yards,
    /// Centimetre (`0.393701 in`).
    #[unit(name = "cm", factor = 0.393701)]
    Centimeters,
}

/// A quantity measured in length units.
pub type Length = Quantity<LengthUnit>;
