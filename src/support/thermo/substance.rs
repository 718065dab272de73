//! Canonical substances with tabulated heat capacity data.
//!
//! A substance type names a species and supplies its data as static rows.
//! [`ThermoData::of`] turns those rows into validated data, so a bad table is
//! reported as a [`ConstructionError`] rather than a panic.
//!
//! Coefficient rows follow [`HeatCapacitySegment::from_coefficients`]: eight
//! values are a Shomate fit and one value is a constant `cp` in J/(mol·K).

mod nitrogen;
mod water;

pub use nitrogen::Nitrogen;
pub use water::Water;

use uom::si::{
    f64::{MolarEnergy, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    thermodynamic_temperature::kelvin,
};

use super::{ConstructionError, HeatCapacitySegment, LatentHeat, ThermoData};

/// One heat capacity segment in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRow {
    pub min_kelvin: f64,
    pub max_kelvin: f64,
    pub coefficients: &'static [f64],
}

/// One latent heat event in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatentHeatRow {
    pub kelvin: f64,
    pub joule_per_mole: f64,
}

/// Tabulated data for a substance.
pub trait Substance {
    /// Heat capacity segments, in any order.
    const HEAT_CAPACITY: &'static [SegmentRow];

    /// Phase transitions within the heat capacity range.
    const LATENT_HEATS: &'static [LatentHeatRow] = &[];
}

impl ThermoData {
    /// Builds validated data for a tabulated substance.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if the substance's rows are malformed
    /// or do not form a contiguous range.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_thermo_data::support::thermo::{ThermoData, substance::Nitrogen};
    /// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
    ///
    /// let data = ThermoData::of::<Nitrogen>().unwrap();
    /// assert_eq!(data.min(), ThermodynamicTemperature::new::<kelvin>(100.0));
    /// assert_eq!(data.max(), ThermodynamicTemperature::new::<kelvin>(2000.0));
    /// ```
    pub fn of<S: Substance>() -> Result<Self, ConstructionError> {
        let segments = S::HEAT_CAPACITY
            .iter()
            .map(|row| {
                HeatCapacitySegment::from_coefficients(
                    row.min_kelvin,
                    row.max_kelvin,
                    row.coefficients,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let latent_heats = S::LATENT_HEATS.iter().map(|row| {
            LatentHeat::new(
                ThermodynamicTemperature::new::<kelvin>(row.kelvin),
                MolarEnergy::new::<joule_per_mole>(row.joule_per_mole),
            )
        });

        Self::new(segments, latent_heats)
    }
}
