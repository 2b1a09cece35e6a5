//! Built-in unit categories grouped by physical dimension.
//!
//! `mensura-core` ships its unit catalog so that conversions, capability
//! checks, and formatting work out of the box without downstream crates
//! having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: length units (inch is the base representation).
//! - [`weight`]: weight units (gram is the base representation).
//! - [`volume`]: volume units (litre is the base representation).
//! - [`temperature`]: temperature units (Kelvin is the base
//!   representation); the one affine category, and the one that opts out
//!   of arithmetic.

pub mod length;
pub mod temperature;
pub mod volume;
pub mod weight;
