//! Volume units.
//!
//! The base representation for this category is the **litre**. The US
//! gallon uses the conventional rounded factor `3.78541 L`.
//!
//! ```rust
//! use mensura_core::volume::{Volume, VolumeUnit};
//!
//! let litre = Volume::new(1.0, VolumeUnit::Litre).unwrap();
//! let ml = litre.convert_to(VolumeUnit::Millilitre);
//! assert_eq!(ml.value(), 1000.0);
//! ```

use crate::Quantity;
use mensura_derive::Unit;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[unit(category = "volume")]
pub enum VolumeUnit {
    /// Millilitre (`1e-3 L`).
    #[unit(name = "mL", factor = 0.001)]
    Millilitre,
    /// Litre, the base unit.
    #[unit(name = "L", factor = 1.0)]
    Litre,
    /// US gallon (`3.78541 L`).
    #[unit(name = "gal", factor = 3.78541)]
    Gallon,
}

/// A quantity measured in volume units.
pub type Volume = Quantity<VolumeUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn volume(value: f64, unit: VolumeUnit) -> Volume {
        Volume::new(value, unit).unwrap()
    }

    #[test]
    fn conversion_factors() {
        assert_eq!(VolumeUnit::Millilitre.conversion_factor(), 0.001);
        assert_eq!(VolumeUnit::Litre.conversion_factor(), 1.0);
        assert_eq!(VolumeUnit::Gallon.conversion_factor(), 3.78541);
    }

    #[test]
    fn litre_to_millilitre() {
        let result = volume(2.5, VolumeUnit::Litre).convert_to(VolumeUnit::Millilitre);
        assert_abs_diff_eq!(result.value(), 2500.0, epsilon = 1e-9);
    }

    #[test]
    fn gallon_to_litre() {
        let result = volume(1.0, VolumeUnit::Gallon).convert_to(VolumeUnit::Litre);
        assert_abs_diff_eq!(result.value(), 3.78541, epsilon = 1e-9);
    }

    #[test]
    fn millilitre_to_gallon() {
        let result = volume(1000.0, VolumeUnit::Millilitre).convert_to(VolumeUnit::Gallon);
        assert_abs_diff_eq!(result.value(), 0.264172, epsilon = 1e-6);
    }

    #[test]
    fn one_litre_equals_thousand_millilitres() {
        assert_eq!(volume(1.0, VolumeUnit::Litre), volume(1000.0, VolumeUnit::Millilitre));
    }

    #[test]
    fn gallon_litre_equivalence() {
        assert_eq!(volume(1.0, VolumeUnit::Gallon), volume(3.78541, VolumeUnit::Litre));
    }

    #[test]
    fn negative_volumes_compare_in_base() {
        assert_eq!(volume(-1.0, VolumeUnit::Litre), volume(-1000.0, VolumeUnit::Millilitre));
    }

    #[test]
    fn addition_with_target_unit_litre() {
        let sum = volume(1.0, VolumeUnit::Gallon)
            .add_into(volume(1.0, VolumeUnit::Litre), VolumeUnit::Litre)
            .unwrap();
        assert_eq!(sum, volume(4.78541, VolumeUnit::Litre));
    }

    #[test]
    fn addition_with_target_unit_millilitre() {
        let sum = volume(1.0, VolumeUnit::Litre)
            .add_into(volume(1.0, VolumeUnit::Gallon), VolumeUnit::Millilitre)
            .unwrap();
        assert_eq!(sum, volume(4785.41, VolumeUnit::Millilitre));
    }

    #[test]
    fn half_gallon_plus_equivalent_litres() {
        let sum = volume(0.5, VolumeUnit::Gallon)
            .add(volume(1.892705, VolumeUnit::Litre))
            .unwrap();
        assert_eq!(sum, volume(1.0, VolumeUnit::Gallon));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_litre_gallon(v in -1e6..1e6f64) {
            let original = volume(v, VolumeUnit::Litre);
            let back = original
                .convert_to(VolumeUnit::Gallon)
                .convert_to(VolumeUnit::Litre);
            prop_assert!((back.value() - original.value()).abs() < 1e-9 * v.abs().max(1.0));
        }
    }
}
