//! Supporting data types and utilities.
//!
//! These modules are public because consumers build and evaluate
//! [`thermo::ThermoData`] directly, but their APIs are not yet stable.

pub mod numeric;
pub mod thermo;
pub mod units;
