//! Thermistor front end model shared between the table generator and
//! firmware-side tests. Builds without `std` unless the `std` feature is on.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod constants;
pub mod model;
pub mod physical;
