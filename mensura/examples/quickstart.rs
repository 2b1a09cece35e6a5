//! Minimal end-to-end example: equality, conversion, and arithmetic per category.

use mensura::{
    Length, LengthUnit, MeasureError, Temperature, TemperatureUnit, Volume, VolumeUnit, Weight,
    WeightUnit,
};

fn main() -> Result<(), MeasureError> {
    // Length: 1 ft and 12 in are the same measurement.
    let feet = Length::new(1.0, LengthUnit::Feet)?;
    let inches = Length::new(12.0, LengthUnit::Inches)?;
    assert_eq!(feet, inches);
    assert_eq!(feet.add(inches)?.value(), 2.0);

    // Weight: addition works across units, result in the receiver's unit.
    let kg = Weight::new(1.0, WeightUnit::Kilogram)?;
    let g = Weight::new(1000.0, WeightUnit::Gram)?;
    assert_eq!(kg.add(g)?.value(), 2.0);

    // Volume: explicit target unit for the result.
    let litre = Volume::new(1.0, VolumeUnit::Litre)?;
    let gallon = Volume::new(1.0, VolumeUnit::Gallon)?;
    let sum = litre.add_into(gallon, VolumeUnit::Millilitre)?;
    assert_eq!(sum.value(), 4785.41);

    // Temperature: converts freely, refuses arithmetic.
    let boiling = Temperature::new(100.0, TemperatureUnit::Celsius)?;
    let f = boiling.convert_to(TemperatureUnit::Fahrenheit);
    assert!((f.value() - 212.0).abs() < 1e-9);
    assert!(boiling.add(f).is_err());

    Ok(())
}
