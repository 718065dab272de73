use std::fmt;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{ConstructionError, TemperatureOutOfRange};

/// A closed, finite temperature interval `[min, max]` with `min < max`.
///
/// # Example
///
/// ```
/// use twine_thermo_data::support::thermo::TemperatureRange;
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
///
/// let t = |k: f64| ThermodynamicTemperature::new::<kelvin>(k);
///
/// let range = TemperatureRange::new(t(273.15), t(373.15)).unwrap();
/// assert!(range.contains(t(373.15)));
/// assert!(!range.contains(t(400.0)));
///
/// assert!(TemperatureRange::new(t(300.0), t(300.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    min: ThermodynamicTemperature,
    max: ThermodynamicTemperature,
}

impl TemperatureRange {
    /// Creates a range from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidRange`] if either bound is not
    /// finite or if `min >= max`.
    pub fn new(
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    ) -> Result<Self, ConstructionError> {
        let (lo, hi) = (min.get::<kelvin>(), max.get::<kelvin>());
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ConstructionError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> ThermodynamicTemperature {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> ThermodynamicTemperature {
        self.max
    }

    /// Returns `true` if `temperature` lies within `[min, max]`.
    ///
    /// `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, temperature: ThermodynamicTemperature) -> bool {
        self.min <= temperature && temperature <= self.max
    }

    /// Checks that both ends of an interval lie within this range.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if either temperature is outside.
    pub fn check(
        &self,
        t_initial: ThermodynamicTemperature,
        t_final: ThermodynamicTemperature,
    ) -> Result<(), TemperatureOutOfRange> {
        if self.contains(t_initial) && self.contains(t_final) {
            Ok(())
        } else {
            Err(TemperatureOutOfRange {
                range: *self,
                t_initial,
                t_final,
            })
        }
    }
}

impl fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} K, {} K]",
            self.min.get::<kelvin>(),
            self.max.get::<kelvin>()
        )
    }
}
