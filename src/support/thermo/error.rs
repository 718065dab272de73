use std::fmt;

use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::TemperatureRange;

/// Errors that may occur while building heat capacity data.
///
/// Construction is fail-fast: the first violation found is returned and no
/// partially validated value is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// A temperature range is not finite or does not satisfy `min < max`.
    ///
    /// Shomate fits additionally require `min > 0 K`.
    #[error("invalid temperature range: min={} K, max={} K", .min.get::<kelvin>(), .max.get::<kelvin>())]
    InvalidRange {
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    },

    /// A coefficient row does not describe a recognized segment shape.
    ///
    /// Shomate rows carry 8 coefficients and constant rows carry 1.
    #[error("unrecognized heat capacity segment with {count} coefficients")]
    InvalidElementType { count: usize },

    /// No heat capacity segments were provided.
    #[error("heat capacity data requires at least one segment")]
    Empty,

    /// Adjacent segments (after sorting by `min`) do not share a boundary.
    #[error(
        "non-continuous temperature ranges: {kind} between {} K and {} K",
        .upper.get::<kelvin>(),
        .lower.get::<kelvin>()
    )]
    Discontinuous {
        kind: Discontinuity,
        /// Upper bound of the lower segment.
        upper: ThermodynamicTemperature,
        /// Lower bound of the following segment.
        lower: ThermodynamicTemperature,
    },

    /// A latent heat event lies outside the heat capacity range.
    #[error(
        "latent heat at {} K outside heat capacity range {range}",
        .temperature.get::<kelvin>()
    )]
    LatentHeatOutOfRange {
        temperature: ThermodynamicTemperature,
        range: TemperatureRange,
    },
}

/// The way two adjacent segment ranges fail to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discontinuity {
    Gap,
    Overlap,
}

impl fmt::Display for Discontinuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gap => f.write_str("gap"),
            Self::Overlap => f.write_str("overlap"),
        }
    }
}

/// A requested temperature falls outside the valid range.
///
/// Carries the range that was violated along with both requested
/// temperatures, at least one of which lies outside it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error(
    "temperatures must be within {range}: t_initial={} K, t_final={} K",
    .t_initial.get::<kelvin>(),
    .t_final.get::<kelvin>()
)]
pub struct TemperatureOutOfRange {
    pub range: TemperatureRange,
    pub t_initial: ThermodynamicTemperature,
    pub t_final: ThermodynamicTemperature,
}
