//! Quantity type and its implementations.

use crate::error::{MeasureError, MeasureResult};
use crate::unit::{Operation, Unit};
use core::any::TypeId;
use core::fmt::{Display, Formatter};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude paired with a unit variant of one category.
///
/// `Quantity<U>` is an immutable `(f64, U)` pair. Every operation reads its
/// operands and returns a new value; nothing is ever mutated in place, so
/// values can be copied and shared across threads freely.
///
/// Arithmetic converts both operands to the category base representation,
/// combines them there, converts the result to the output unit, and rounds
/// it to two decimal places. Conversion alone never rounds.
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::{Length, LengthUnit};
///
/// let feet = Length::new(1.0, LengthUnit::Feet)?;
/// let inches = Length::new(12.0, LengthUnit::Inches)?;
///
/// assert_eq!(feet, inches);
/// assert_eq!(feet.add(inches)?.value(), 2.0);
/// # Ok::<(), mensura_core::MeasureError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

/// Two base-representation values closer than this compare equal.
const EQ_TOLERANCE: f64 = 0.01;

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity.
    ///
    /// A NaN magnitude is rejected with [`MeasureError::InvalidArgument`].
    /// Infinite magnitudes are accepted: a lone infinite quantity is a
    /// representable value, and only arithmetic refuses to combine one
    /// with another quantity.
    ///
    /// ```rust
    /// use mensura_core::weight::{Weight, WeightUnit};
    ///
    /// let kg = Weight::new(1.0, WeightUnit::Kilogram).unwrap();
    /// assert_eq!(kg.value(), 1.0);
    /// assert!(Weight::new(f64::NAN, WeightUnit::Kilogram).is_err());
    /// ```
    pub fn new(value: f64, unit: U) -> MeasureResult<Self> {
        if value.is_nan() {
            return Err(MeasureError::InvalidArgument("value must not be NaN"));
        }
        Ok(Self { value, unit })
    }

    /// Returns the raw magnitude.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns the unit tag.
    #[inline]
    pub const fn unit(self) -> U {
        self.unit
    }

    /// Magnitude expressed in the category base representation.
    #[inline]
    fn base_value(self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Converts this quantity to another unit of the same category.
    ///
    /// The result is `target.from_base(self.unit.to_base(value))`, exact up
    /// to floating-point precision; no rounding is applied. The receiver is
    /// unchanged.
    ///
    /// ```rust
    /// use mensura_core::temperature::{Temperature, TemperatureUnit};
    ///
    /// let boiling = Temperature::new(100.0, TemperatureUnit::Celsius).unwrap();
    /// let f = boiling.convert_to(TemperatureUnit::Fahrenheit);
    /// assert!((f.value() - 212.0).abs() < 1e-9);
    /// ```
    pub fn convert_to(self, target: U) -> Self {
        Self {
            value: target.from_base(self.base_value()),
            unit: target,
        }
    }

    /// Adds `other`, expressing the result in the receiver's unit.
    ///
    /// ```rust
    /// use mensura_core::length::{Length, LengthUnit};
    ///
    /// let sum = Length::new(1.0, LengthUnit::Feet)
    ///     .unwrap()
    ///     .add(Length::new(12.0, LengthUnit::Inches).unwrap())
    ///     .unwrap();
    /// assert_eq!(sum.value(), 2.0);
    /// assert_eq!(sum.unit(), LengthUnit::Feet);
    /// ```
    pub fn add(self, other: Self) -> MeasureResult<Self> {
        self.combine(other, self.unit, Operation::Add)
    }

    /// Adds `other`, expressing the result in `target`.
    pub fn add_into(self, other: Self, target: U) -> MeasureResult<Self> {
        self.combine(other, target, Operation::Add)
    }

    /// Subtracts `other` from the receiver, expressing the result in the
    /// receiver's unit.
    pub fn subtract(self, other: Self) -> MeasureResult<Self> {
        self.combine(other, self.unit, Operation::Subtract)
    }

    /// Subtracts `other` from the receiver, expressing the result in `target`.
    pub fn subtract_into(self, other: Self, target: U) -> MeasureResult<Self> {
        self.combine(other, target, Operation::Subtract)
    }

    /// Returns the dimensionless ratio `self / other`, computed on base
    /// values.
    ///
    /// Fails with [`MeasureError::DivisionByZero`] when `other`'s base
    /// value is exactly zero. The ratio is not rounded.
    ///
    /// ```rust
    /// use mensura_core::length::{Length, LengthUnit};
    ///
    /// let feet = Length::new(1.0, LengthUnit::Feet).unwrap();
    /// let inches = Length::new(6.0, LengthUnit::Inches).unwrap();
    /// assert_eq!(feet.divide(inches).unwrap(), 2.0);
    /// ```
    pub fn divide(self, other: Self) -> MeasureResult<f64> {
        self.validate_operands(other, Operation::Divide)?;
        Operation::Divide.apply(self.base_value(), other.base_value())
    }

    /// Shared pipeline for add and subtract: validate, combine in base
    /// representation, convert to the output unit, round once.
    fn combine(self, other: Self, target: U, operation: Operation) -> MeasureResult<Self> {
        self.validate_operands(other, operation)?;

        let base = operation.apply(self.base_value(), other.base_value())?;

        Ok(Self {
            value: round_two_decimals(target.from_base(base)),
            unit: target,
        })
    }

    // Structural checks run before the capability check, so a non-finite
    // operand is reported as InvalidArgument even on categories that also
    // disallow the operation. No numeric work happens until both pass.
    fn validate_operands(self, other: Self, operation: Operation) -> MeasureResult<()> {
        if !self.value.is_finite() || !other.value.is_finite() {
            return Err(MeasureError::InvalidArgument("operands must be finite"));
        }

        self.unit.validate_operation(operation)?;
        other.unit.validate_operation(operation)?;

        Ok(())
    }
}

/// Rounds half-up to two decimal places.
///
/// Half-up means ties go toward positive infinity: `-0.125` rounds to
/// `-0.12`, where `f64::round` (half away from zero) would give `-0.13`.
fn round_two_decimals(value: f64) -> f64 {
    floor(value * 100.0 + 0.5) / 100.0
}

#[cfg(feature = "std")]
fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(not(feature = "std"))]
fn floor(value: f64) -> f64 {
    libm::floor(value)
}

// ─────────────────────────────────────────────────────────────────────────────
// Equality, hashing, formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Unit> PartialEq<Quantity<V>> for Quantity<U> {
    /// Quantities are equal iff they belong to the same category and their
    /// base-representation values differ by less than `0.01`.
    ///
    /// Comparing across categories returns `false`; it never fails. The
    /// category check is a runtime tag comparison so that type-erased
    /// call sites get an answer instead of a type error.
    ///
    /// Tolerance comparison is reflexive and symmetric but **not**
    /// transitive near the boundary: three values spaced 0.009 apart chain
    /// past the threshold. That is inherent to tolerance-based equality
    /// and is preserved as-is, which is also why `Quantity` is not `Eq`.
    fn eq(&self, other: &Quantity<V>) -> bool {
        if TypeId::of::<U>() != TypeId::of::<V>() {
            return false;
        }

        (self.base_value() - other.base_value()).abs() < EQ_TOLERANCE
    }
}

impl<U: Unit> Hash for Quantity<U> {
    /// Hashes the base value rounded to two decimals, so quantities that
    /// compare equal and round to the same bucket hash identically
    /// (`1 ft` and `12 in` share a hash). Values within tolerance that
    /// round to *different* buckets are an accepted edge case of
    /// tolerance-based equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        round_two_decimals(self.base_value()).to_bits().hash(state);
    }
}

impl<U: Unit> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit + Serialize> Serialize for Quantity<U> {
    /// Serializes as a struct with `value` and `unit` fields, e.g.
    /// `{"value": 1.0, "unit": "Feet"}`.
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", &self.unit)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit + Deserialize<'de>> Deserialize<'de> for Quantity<U> {
    /// Deserializes the struct form produced by `Serialize`, re-applying
    /// construction validation: a NaN `value` is rejected.
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<U> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;

                Quantity::new(value, unit).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}
