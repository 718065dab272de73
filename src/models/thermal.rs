//! Thermal models.
//!
//! This module contains models that heat or cool a quantity of substance
//! described by [`ThermoData`](crate::support::thermo::ThermoData).

pub mod heating;
