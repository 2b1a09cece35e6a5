//! Weight units.
//!
//! The base representation for this category is the **gram**. Metric
//! factors are exact; the pound uses the conventional rounded factor
//! `453.592 g`.
//!
//! ```rust
//! use mensura_core::weight::{Weight, WeightUnit};
//!
//! let kg = Weight::new(1.0, WeightUnit::Kilogram).unwrap();
//! let g = kg.convert_to(WeightUnit::Gram);
//! assert_eq!(g.value(), 1000.0);
//! ```

use crate::Quantity;
use mensura_derive::Unit;

/// Units of weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[unit(category = "weight")]
pub enum WeightUnit {
    /// Milligram (`1e-3 g`).
    #[unit(name = "mg", factor = 0.001)]
    Milligram,
    /// Gram, the base unit.
    #[unit(name = "g", factor = 1.0)]
    Gram,
    /// Kilogram (`1e3 g`).
    #[unit(name = "kg", factor = 1_000.0)]
    Kilogram,
    /// Pound (`453.592 g`).
    #[unit(name = "lb", factor = 453.592)]
    Pound,
    /// Tonne (`1e6 g`).
    #[unit(name = "t", factor = 1_000_000.0)]
    Tonne,
}

/// A quantity measured in weight units.
pub type Weight = Quantity<WeightUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn weight(value: f64, unit: WeightUnit) -> Weight {
        Weight::new(value, unit).unwrap()
    }

    #[test]
    fn conversion_factors() {
        assert_eq!(WeightUnit::Milligram.conversion_factor(), 0.001);
        assert_eq!(WeightUnit::Gram.conversion_factor(), 1.0);
        assert_eq!(WeightUnit::Kilogram.conversion_factor(), 1_000.0);
        assert_eq!(WeightUnit::Pound.conversion_factor(), 453.592);
        assert_eq!(WeightUnit::Tonne.conversion_factor(), 1_000_000.0);
    }

    #[test]
    fn kilogram_to_gram() {
        let result = weight(1.0, WeightUnit::Kilogram).convert_to(WeightUnit::Gram);
        assert_abs_diff_eq!(result.value(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn one_kilogram_equals_thousand_grams() {
        assert_eq!(weight(1.0, WeightUnit::Kilogram), weight(1000.0, WeightUnit::Gram));
    }

    #[test]
    fn pound_to_grams() {
        let result = weight(1.0, WeightUnit::Pound).convert_to(WeightUnit::Gram);
        assert_abs_diff_eq!(result.value(), 453.592, epsilon = 1e-9);
    }

    #[test]
    fn addition_across_units() {
        let sum = weight(1.0, WeightUnit::Kilogram)
            .add(weight(1000.0, WeightUnit::Gram))
            .unwrap();
        assert_eq!(sum, weight(2.0, WeightUnit::Kilogram));
    }

    #[test]
    fn subtraction_to_milligrams() {
        let diff = weight(1.0, WeightUnit::Gram)
            .subtract_into(weight(0.5, WeightUnit::Gram), WeightUnit::Milligram)
            .unwrap();
        assert_eq!(diff, weight(500.0, WeightUnit::Milligram));
    }

    #[test]
    fn tonne_division() {
        let ratio = weight(1.0, WeightUnit::Tonne)
            .divide(weight(500.0, WeightUnit::Kilogram))
            .unwrap();
        assert_abs_diff_eq!(ratio, 2.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_kg_g(v in -1e6..1e6f64) {
            let original = weight(v, WeightUnit::Kilogram);
            let back = original
                .convert_to(WeightUnit::Gram)
                .convert_to(WeightUnit::Kilogram);
            prop_assert!((back.value() - original.value()).abs() < 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_pound(v in -1e6..1e6f64) {
            let original = weight(v, WeightUnit::Pound);
            let back = original
                .convert_to(WeightUnit::Tonne)
                .convert_to(WeightUnit::Pound);
            prop_assert!((back.value() - original.value()).abs() < 1e-9 * v.abs().max(1.0));
        }
    }
}
