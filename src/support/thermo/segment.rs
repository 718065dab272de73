//! Heat capacity models valid over a single temperature range.

mod constant;
mod shomate;

use std::fmt;

use uom::si::{
    f64::{AmountOfSubstance, Energy, MolarHeatCapacity, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    thermodynamic_temperature::kelvin,
};

pub use constant::ConstantCp;
pub use shomate::Shomate;

use super::{ConstructionError, TemperatureOutOfRange, TemperatureRange};

/// A heat capacity model over one bounded temperature range.
///
/// Segments are immutable once built and are usually combined into a
/// [`ThermoData`](super::ThermoData), which handles intervals spanning
/// several segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatCapacitySegment {
    Shomate(Shomate),
    Constant(ConstantCp),
}

impl HeatCapacitySegment {
    /// Creates a Shomate segment from coefficients `[A, B, C, D, E, F, G, H]`.
    ///
    /// The fit divides by the reduced temperature, so the range must lie
    /// strictly above absolute zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidRange`] unless `0 K < min < max`
    /// and both are finite.
    pub fn shomate(
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
        coefficients: [f64; 8],
    ) -> Result<Self, ConstructionError> {
        let range = TemperatureRange::new(min, max)?;
        if min.get::<kelvin>() <= 0.0 {
            return Err(ConstructionError::InvalidRange { min, max });
        }
        Ok(Self::Shomate(Shomate::new(range, coefficients)))
    }

    /// Creates a constant heat capacity segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidRange`] unless `min < max` and both are finite.
    pub fn constant(
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
        cp: MolarHeatCapacity,
    ) -> Result<Self, ConstructionError> {
        let range = TemperatureRange::new(min, max)?;
        Ok(Self::Constant(ConstantCp::new(range, cp)))
    }

    /// Creates a segment from a raw row of coefficients in SI units.
    ///
    /// Eight coefficients describe a Shomate fit and a single coefficient is
    /// a constant `cp` in J/(mol·K).
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidElementType`] for any other
    /// coefficient count, or [`ConstructionError::InvalidRange`] for a bad range.
    pub fn from_coefficients(
        min_kelvin: f64,
        max_kelvin: f64,
        coefficients: &[f64],
    ) -> Result<Self, ConstructionError> {
        let min = ThermodynamicTemperature::new::<kelvin>(min_kelvin);
        let max = ThermodynamicTemperature::new::<kelvin>(max_kelvin);

        match *coefficients {
            [cp] => Self::constant(min, max, MolarHeatCapacity::new::<joule_per_kelvin_mole>(cp)),
            [a, b, c, d, e, f, g, h] => Self::shomate(min, max, [a, b, c, d, e, f, g, h]),
            _ => Err(ConstructionError::InvalidElementType {
                count: coefficients.len(),
            }),
        }
    }

    #[must_use]
    pub fn range(&self) -> TemperatureRange {
        match self {
            Self::Shomate(shomate) => shomate.range(),
            Self::Constant(constant) => constant.range(),
        }
    }

    #[must_use]
    pub fn min(&self) -> ThermodynamicTemperature {
        self.range().min()
    }

    #[must_use]
    pub fn max(&self) -> ThermodynamicTemperature {
        self.range().max()
    }

    /// Computes the enthalpy change of `amount` between two temperatures in this segment.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if either temperature is outside the segment.
    pub fn delta_h(
        &self,
        amount: AmountOfSubstance,
        t_initial: ThermodynamicTemperature,
        t_final: ThermodynamicTemperature,
    ) -> Result<Energy, TemperatureOutOfRange> {
        match self {
            Self::Shomate(shomate) => shomate.delta_h(amount, t_initial, t_final),
            Self::Constant(constant) => constant.delta_h(amount, t_initial, t_final),
        }
    }

    /// Returns the molar heat capacity at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if `temperature` is outside the segment.
    pub fn cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, TemperatureOutOfRange> {
        match self {
            Self::Shomate(shomate) => shomate.cp(temperature),
            Self::Constant(constant) => constant.cp(temperature),
        }
    }
}

impl From<Shomate> for HeatCapacitySegment {
    fn from(shomate: Shomate) -> Self {
        Self::Shomate(shomate)
    }
}

impl From<ConstantCp> for HeatCapacitySegment {
    fn from(constant: ConstantCp) -> Self {
        Self::Constant(constant)
    }
}

impl fmt::Display for HeatCapacitySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shomate(shomate) => write!(f, "{shomate}"),
            Self::Constant(constant) => write!(f, "{constant}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{amount_of_substance::mole, energy::joule};

    fn t(k: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(k)
    }

    #[test]
    fn constructors_validate_range() {
        let cp = MolarHeatCapacity::new::<joule_per_kelvin_mole>(20.0);

        assert!(HeatCapacitySegment::constant(t(0.0), t(100.0), cp).is_ok());
        assert!(matches!(
            HeatCapacitySegment::constant(t(100.0), t(0.0), cp),
            Err(ConstructionError::InvalidRange { .. })
        ));
        assert!(matches!(
            HeatCapacitySegment::shomate(t(500.0), t(500.0), [0.0; 8]),
            Err(ConstructionError::InvalidRange { .. })
        ));
    }

    #[test]
    fn shomate_range_must_stay_above_absolute_zero() {
        let coefficients = [30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

        assert_eq!(
            HeatCapacitySegment::shomate(t(0.0), t(1000.0), coefficients),
            Err(ConstructionError::InvalidRange {
                min: t(0.0),
                max: t(1000.0),
            })
        );
        assert!(matches!(
            HeatCapacitySegment::from_coefficients(-10.0, 1000.0, &coefficients),
            Err(ConstructionError::InvalidRange { .. })
        ));

        // A constant cp has no reciprocal term and may start at 0 K.
        let constant = HeatCapacitySegment::from_coefficients(0.0, 1000.0, &[30.0]).unwrap();
        let dh = constant
            .delta_h(AmountOfSubstance::new::<mole>(1.0), t(0.0), t(100.0))
            .unwrap();
        assert_relative_eq!(dh.get::<joule>(), 3000.0, epsilon = 1e-9);

        let shomate = HeatCapacitySegment::shomate(t(1e-3), t(1000.0), coefficients).unwrap();
        let dh = shomate
            .delta_h(AmountOfSubstance::new::<mole>(1.0), t(1e-3), t(100.0))
            .unwrap();
        assert!(dh.get::<joule>().is_finite());
    }

    #[test]
    fn coefficient_rows_select_shape() {
        let constant = HeatCapacitySegment::from_coefficients(0.0, 100.0, &[20.0]).unwrap();
        assert!(matches!(constant, HeatCapacitySegment::Constant(_)));

        let shomate = HeatCapacitySegment::from_coefficients(100.0, 500.0, &[1.0; 8]).unwrap();
        assert!(matches!(shomate, HeatCapacitySegment::Shomate(_)));
        assert_eq!(shomate.min(), t(100.0));
        assert_eq!(shomate.max(), t(500.0));

        for count in [0, 2, 7, 9] {
            assert_eq!(
                HeatCapacitySegment::from_coefficients(0.0, 100.0, &vec![1.0; count]),
                Err(ConstructionError::InvalidElementType { count })
            );
        }
    }

    #[test]
    fn both_shapes_share_the_evaluation_contract() {
        let n = AmountOfSubstance::new::<mole>(1.0);
        let constant = HeatCapacitySegment::from_coefficients(0.0, 1000.0, &[30.0]).unwrap();
        let shomate = HeatCapacitySegment::from_coefficients(
            50.0,
            1000.0,
            &[30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        )
        .unwrap();

        for segment in [constant, shomate] {
            let dh = segment.delta_h(n, t(100.0), t(300.0)).unwrap();
            assert_relative_eq!(dh.get::<joule>(), 6000.0, epsilon = 1e-9);

            let cp = segment.cp(t(300.0)).unwrap();
            assert_relative_eq!(cp.get::<joule_per_kelvin_mole>(), 30.0);

            assert!(segment.delta_h(n, t(100.0), t(1000.1)).is_err());
        }
    }

    #[test]
    fn display_delegates_to_shape() {
        let segment = HeatCapacitySegment::from_coefficients(
            100.0,
            500.0,
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )
        .unwrap();

        assert_eq!(
            segment.to_string(),
            "Shomate([100 K, 500 K], A=1, B=2, C=3, D=4, E=5, F=6, G=7, H=8)"
        );
    }
}
