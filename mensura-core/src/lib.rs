//! Core type system for category-safe measured quantities.
//!
//! `mensura-core` provides a small runtime units model:
//!
//! - A *category* is a closed enum of unit variants implementing [`Unit`].
//! - A magnitude tagged with a unit is a [`Quantity<U>`], backed by an `f64`.
//! - Conversion always pivots through the category's base representation,
//!   which lets linear categories (factor) and affine categories
//!   (offset/scale, i.e. temperature) share one contract.
//! - Arithmetic is gated per category: length, weight, and volume support
//!   it; temperature rejects it with a typed error.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of categories (you can't add litres to feet).
//! - One conversion contract for both linear and affine unit rules, with
//!   the value type ignorant of which rule a category uses.
//! - A single arithmetic policy: combine in base representation, convert
//!   to the output unit, round half-up to two decimals, exactly once.
//! - Tolerance-aware equality (`|Δbase| < 0.01`) with hashing that keeps
//!   equal-and-same-bucket values in one hash bucket.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Derived dimensions (`m/s`, `m^2`, …); every quantity carries exactly
//!   one category.
//! - Parsing quantities from text, or locale-aware formatting.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use mensura_core::length::{Length, LengthUnit};
//!
//! let feet = Length::new(1.25, LengthUnit::Feet).unwrap();
//! let inches = feet.convert_to(LengthUnit::Inches);
//! assert!((inches.value() - 15.0).abs() < 1e-12);
//! ```
//!
//! Arithmetic validates the operands and the category's capability:
//!
//! ```rust
//! use mensura_core::temperature::{Temperature, TemperatureUnit};
//!
//! let a = Temperature::new(100.0, TemperatureUnit::Celsius).unwrap();
//! let b = Temperature::new(50.0, TemperatureUnit::Celsius).unwrap();
//! assert!(a.add(b).is_err()); // temperature does not support addition
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `mensura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! mensura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support; `Quantity<U>` serializes as a
//!   struct with `value` and `unit` fields, and construction validation is
//!   re-applied on deserialize.
//!
//! # Panics and errors
//!
//! Operations never panic and nothing is logged. Failures (NaN at
//! construction, non-finite arithmetic operands, unsupported category
//! arithmetic, division by a zero base value) surface synchronously as
//! [`MeasureError`] values; there is no retry or fallback.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{MeasureError, MeasureResult};
pub use quantity::Quantity;
pub use unit::{Operation, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Built-in unit categories (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in unit categories (grouped by physical dimension).
///
/// These are defined in `mensura-core` so they can implement the [`Unit`] trait and serde support without running
/// into Rust's orphan rules.
pub mod units;

pub use units::length;
pub use units::temperature;
pub use units::volume;
pub use units::weight;
