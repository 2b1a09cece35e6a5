//! Temperature units.
//!
//! Temperature is the one affine category: the scales relate through an
//! offset as well as a scale factor, so there is no single multiplicative
//! factor to the base representation and the `#[derive(Unit)]` shortcut
//! does not apply. Conversions route through the base (the **Kelvin**) in
//! both directions; a variant-to-variant shortcut would not compose
//! exactly with `to_base`/`from_base`.
//!
//! The category opts out of arithmetic: adding or averaging readings on an
//! absolute scale is physically meaningless, so `supports_arithmetic`
//! returns `false` and add/subtract/divide fail with
//! [`MeasureError::UnsupportedOperation`](crate::MeasureError).
//!
//! ```rust
//! use mensura_core::temperature::{Temperature, TemperatureUnit};
//!
//! let freezing = Temperature::new(0.0, TemperatureUnit::Celsius).unwrap();
//! let f = freezing.convert_to(TemperatureUnit::Fahrenheit);
//! assert!((f.value() - 32.0).abs() < 1e-9);
//! ```

use crate::{Quantity, Unit};

const KELVIN_AT_ZERO_CELSIUS: f64 = 273.15;

/// Units of temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degree Celsius (`K = v + 273.15`).
    Celsius,
    /// Degree Fahrenheit (`K = (v - 32) * 5/9 + 273.15`).
    Fahrenheit,
    /// Kelvin, the base unit.
    Kelvin,
}

impl Unit for TemperatureUnit {
    const CATEGORY: &'static str = "temperature";

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + KELVIN_AT_ZERO_CELSIUS,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_AT_ZERO_CELSIUS,
            TemperatureUnit::Kelvin => value,
        }
    }

    fn from_base(self, base: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => base - KELVIN_AT_ZERO_CELSIUS,
            TemperatureUnit::Fahrenheit => (base - KELVIN_AT_ZERO_CELSIUS) * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => base,
        }
    }

    fn supports_arithmetic(self) -> bool {
        false
    }
}

/// A quantity measured in temperature units.
pub type Temperature = Quantity<TemperatureUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeasureError, Operation};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn temp(value: f64, unit: TemperatureUnit) -> Temperature {
        Temperature::new(value, unit).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Affine chain: 0°C == 32°F == 273.15K, 100°C == 212°F, -40°C == -40°F
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn celsius_to_fahrenheit_freezing() {
        let result = temp(0.0, TemperatureUnit::Celsius).convert_to(TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(result.value(), 32.0, epsilon = 1e-9);
    }

    #[test]
    fn celsius_to_fahrenheit_boiling() {
        let result = temp(100.0, TemperatureUnit::Celsius).convert_to(TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(result.value(), 212.0, epsilon = 1e-9);
    }

    #[test]
    fn minus_forty_is_the_crossing_point() {
        assert_eq!(
            temp(-40.0, TemperatureUnit::Celsius),
            temp(-40.0, TemperatureUnit::Fahrenheit)
        );
    }

    #[test]
    fn celsius_kelvin_fahrenheit_equalities() {
        let c = temp(0.0, TemperatureUnit::Celsius);
        let f = temp(32.0, TemperatureUnit::Fahrenheit);
        let k = temp(273.15, TemperatureUnit::Kelvin);

        assert_eq!(c, f);
        assert_eq!(f, k);
        assert_eq!(c, k);
    }

    #[test]
    fn fahrenheit_to_kelvin() {
        let result = temp(32.0, TemperatureUnit::Fahrenheit).convert_to(TemperatureUnit::Kelvin);
        assert_abs_diff_eq!(result.value(), 273.15, epsilon = 1e-9);
    }

    #[test]
    fn absolute_zero_in_kelvin() {
        let result = temp(-273.15, TemperatureUnit::Celsius).convert_to(TemperatureUnit::Kelvin);
        assert_abs_diff_eq!(result.value(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn chained_conversions_return_home() {
        let original = temp(10.0, TemperatureUnit::Celsius);
        let back = original
            .convert_to(TemperatureUnit::Fahrenheit)
            .convert_to(TemperatureUnit::Kelvin)
            .convert_to(TemperatureUnit::Celsius);
        assert_abs_diff_eq!(back.value(), original.value(), epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic rejection
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn addition_is_unsupported() {
        let result = temp(100.0, TemperatureUnit::Celsius).add(temp(50.0, TemperatureUnit::Celsius));
        assert_eq!(
            result,
            Err(MeasureError::UnsupportedOperation {
                category: "temperature",
                operation: Operation::Add,
            })
        );
    }

    #[test]
    fn subtraction_is_unsupported() {
        let result =
            temp(100.0, TemperatureUnit::Celsius).subtract(temp(50.0, TemperatureUnit::Celsius));
        assert!(matches!(
            result,
            Err(MeasureError::UnsupportedOperation {
                operation: Operation::Subtract,
                ..
            })
        ));
    }

    #[test]
    fn division_is_unsupported() {
        let result = temp(100.0, TemperatureUnit::Celsius).divide(temp(50.0, TemperatureUnit::Celsius));
        assert!(matches!(
            result,
            Err(MeasureError::UnsupportedOperation {
                operation: Operation::Divide,
                ..
            })
        ));
    }

    #[test]
    fn rejection_message_names_the_operation() {
        let err = temp(100.0, TemperatureUnit::Celsius)
            .add(temp(50.0, TemperatureUnit::Celsius))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The temperature category does not support addition"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_celsius_fahrenheit(v in -1e4..1e4f64) {
            let original = temp(v, TemperatureUnit::Celsius);
            let back = original
                .convert_to(TemperatureUnit::Fahrenheit)
                .convert_to(TemperatureUnit::Celsius);
            prop_assert!((back.value() - original.value()).abs() < 1e-9);
        }

        #[test]
        fn prop_roundtrip_kelvin_fahrenheit(v in 0.0..1e4f64) {
            let original = temp(v, TemperatureUnit::Kelvin);
            let back = original
                .convert_to(TemperatureUnit::Fahrenheit)
                .convert_to(TemperatureUnit::Kelvin);
            prop_assert!((back.value() - original.value()).abs() < 1e-9);
        }
    }
}
