//! # Twine Thermo Data
//!
//! Piecewise heat capacity and latent heat data for evaluating molar enthalpy
//! changes, built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`support`]: The property data itself. [`support::thermo::ThermoData`]
//!   validates contiguous heat capacity segments and latent heat events, and
//!   evaluates `ΔH` between any two temperatures in its range.
//! - [`models`]: [`twine_core::Model`] adapters over that data, including the
//!   inverse "temperature reached for a given heat" solve.
//!
//! ## Example
//!
//! ```
//! use twine_thermo_data::support::thermo::{HeatCapacitySegment, LatentHeat, ThermoData};
//! use uom::si::{
//!     amount_of_substance::mole,
//!     energy::joule,
//!     f64::{AmountOfSubstance, MolarEnergy, MolarHeatCapacity, ThermodynamicTemperature},
//!     molar_energy::joule_per_mole,
//!     molar_heat_capacity::joule_per_kelvin_mole,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let t = |k: f64| ThermodynamicTemperature::new::<kelvin>(k);
//!
//! let segment = HeatCapacitySegment::constant(
//!     t(0.0),
//!     t(1000.0),
//!     MolarHeatCapacity::new::<joule_per_kelvin_mole>(30.0),
//! )
//! .unwrap();
//! let melting = LatentHeat::new(t(500.0), MolarEnergy::new::<joule_per_mole>(9000.0));
//!
//! let data = ThermoData::new([segment], [melting]).unwrap();
//! let dh = data
//!     .delta_h(AmountOfSubstance::new::<mole>(1.0), t(400.0), t(600.0))
//!     .unwrap();
//!
//! assert!((dh.get::<joule>() - 15_000.0).abs() < 1e-9);
//! ```

pub mod models;
pub mod support;
