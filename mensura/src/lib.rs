//! Category-safe measured quantities and conversions.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core` plus the
//! built-in unit categories (length, weight, volume, temperature).
//!
//! The core idea is: a value is always a [`Quantity<U>`], where `U` is the enum of unit variants for one physical
//! category. The category type keeps incompatible measurements apart at compile time; the variant carried at
//! runtime drives conversion through the category's base representation.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible categories (you can't add litres to feet).
//! - Makes unit conversion explicit and category-checked (`convert_to(target)`).
//! - Unifies linear units (feet, grams, litres) and affine units (temperature scales) behind one contract, and
//!   lets a category opt out of arithmetic entirely (temperature does).
//!
//! # What this crate does not try to solve
//!
//! - Derived dimensions (`m/s`, `m^2`, …); every quantity carries exactly one category.
//! - Exact arithmetic: quantities are backed by `f64`, arithmetic results are rounded to two decimals.
//! - Parsing quantities from text, or locale-aware formatting.
//!
//! # Quick start
//!
//! Convert feet to inches and add across units:
//!
//! ```rust
//! use mensura::length::{Length, LengthUnit};
//!
//! let feet = Length::new(1.0, LengthUnit::Feet)?;
//! let inches = Length::new(12.0, LengthUnit::Inches)?;
//!
//! assert_eq!(feet, inches);
//! assert_eq!(feet.add(inches)?.value(), 2.0);
//! # Ok::<(), mensura::MeasureError>(())
//! ```
//!
//! Temperature converts but refuses arithmetic:
//!
//! ```rust
//! use mensura::temperature::{Temperature, TemperatureUnit};
//!
//! let c = Temperature::new(0.0, TemperatureUnit::Celsius)?;
//! let f = c.convert_to(TemperatureUnit::Fahrenheit);
//! assert!((f.value() - 32.0).abs() < 1e-9);
//!
//! assert!(c.add(f).is_err());
//! # Ok::<(), mensura::MeasureError>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::length::{Length, LengthUnit};
//! use mensura::volume::{Volume, VolumeUnit};
//!
//! let d = Length::new(1.0, LengthUnit::Feet).unwrap();
//! let v = Volume::new(1.0, VolumeUnit::Litre).unwrap();
//! let _ = d.add(v); // cannot add quantities of different categories
//! ```
//!
//! # Modules
//!
//! Units are grouped by category under modules (also re-exported at the crate root for convenience):
//!
//! - `mensura::length` (feet, inches, yards, centimetres)
//! - `mensura::weight` (milligrams through tonnes)
//! - `mensura::volume` (millilitres, litres, gallons)
//! - `mensura::temperature` (Celsius, Fahrenheit, Kelvin)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `mensura-core`.
//! - `serde`: enables `serde` support; quantities serialize as `{value, unit}` structs.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! mensura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Operations never panic and nothing is logged. Invalid construction values, unsupported category arithmetic,
//! and division by a zero base value surface synchronously as [`MeasureError`]; see `mensura-core` for the full
//! taxonomy.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define linear unit categories.
///
/// This macro expands in terms of `crate::Unit` and `crate::Quantity`, so it is intended for use inside
/// `mensura-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use mensura_derive::Unit;

pub use mensura_core::units::length;
pub use mensura_core::units::temperature;
pub use mensura_core::units::volume;
pub use mensura_core::units::weight;

pub use mensura_core::units::length::*;
pub use mensura_core::units::temperature::*;
pub use mensura_core::units::volume::*;
pub use mensura_core::units::weight::*;
