//! Piecewise heat capacity and latent heat data.
//!
//! A substance's data is a [`ThermoData`]: one or more contiguous
//! [`HeatCapacitySegment`]s plus any [`LatentHeat`] events inside their range.
//! [`ThermoData::delta_h`] is the single evaluator used by consumers such as
//! energy balance solvers.
//!
//! Canonical substances with tabulated data live in [`substance`].

mod error;
mod latent_heat;
mod range;
mod segment;
mod thermo_data;

pub mod substance;

pub use error::{ConstructionError, Discontinuity, TemperatureOutOfRange};
pub use latent_heat::LatentHeat;
pub use range::TemperatureRange;
pub use segment::{ConstantCp, HeatCapacitySegment, Shomate};
pub use thermo_data::ThermoData;
