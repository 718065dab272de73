//! Heating and cooling a fixed amount of substance.
//!
//! [`Heating`] wraps borrowed [`ThermoData`] as a [`twine_core::Model`] that
//! maps an amount and a pair of temperatures to the heat absorbed. It also
//! solves the inverse problem: the temperature reached after a given amount
//! of heat is added or removed.

mod given_heat;

pub use given_heat::{GivenHeatConfig, GivenHeatError};

use twine_core::Model;
use uom::si::f64::{AmountOfSubstance, Energy, ThermodynamicTemperature};

use crate::support::thermo::{TemperatureOutOfRange, ThermoData};

/// Input to the [`Heating`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingInput {
    pub amount: AmountOfSubstance,
    pub t_initial: ThermodynamicTemperature,
    pub t_final: ThermodynamicTemperature,
}

/// Heat absorbed by a substance as its temperature changes.
///
/// The output is positive when heating and negative when cooling, and
/// includes any latent heat crossed along the way.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_thermo_data::{
///     models::thermal::heating::{GivenHeatConfig, Heating, HeatingInput},
///     support::thermo::{ThermoData, substance::Nitrogen},
/// };
/// use uom::si::{
///     amount_of_substance::mole,
///     f64::{AmountOfSubstance, ThermodynamicTemperature},
///     thermodynamic_temperature::kelvin,
/// };
///
/// let data = ThermoData::of::<Nitrogen>().unwrap();
/// let heating = Heating::new(&data);
///
/// let amount = AmountOfSubstance::new::<mole>(1.0);
/// let t_initial = ThermodynamicTemperature::new::<kelvin>(300.0);
/// let t_final = ThermodynamicTemperature::new::<kelvin>(800.0);
///
/// let heat = heating
///     .call(&HeatingInput { amount, t_initial, t_final })
///     .unwrap();
///
/// let reached = heating
///     .final_temperature(amount, t_initial, heat, GivenHeatConfig::default())
///     .unwrap();
/// assert!((reached.get::<kelvin>() - 800.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Heating<'a> {
    data: &'a ThermoData,
}

impl<'a> Heating<'a> {
    #[must_use]
    pub fn new(data: &'a ThermoData) -> Self {
        Self { data }
    }

    /// Returns the wrapped data.
    #[must_use]
    pub fn data(&self) -> &'a ThermoData {
        self.data
    }

    /// Finds the temperature reached when `heat` is added to `amount` at `t_initial`.
    ///
    /// Negative `heat` cools the substance. When the target lands inside a
    /// phase transition, the transition temperature is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GivenHeatError`] if `t_initial` is out of range, if the data
    /// range cannot absorb or release `heat`, or if the solver fails to converge.
    pub fn final_temperature(
        &self,
        amount: AmountOfSubstance,
        t_initial: ThermodynamicTemperature,
        heat: Energy,
        config: GivenHeatConfig,
    ) -> Result<ThermodynamicTemperature, GivenHeatError> {
        given_heat::given_heat(self.data, amount, t_initial, heat, config)
    }
}

impl Model for Heating<'_> {
    type Input = HeatingInput;
    type Output = Energy;
    type Error = TemperatureOutOfRange;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.data
            .delta_h(input.amount, input.t_initial, input.t_final)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        amount_of_substance::mole, energy::joule, f64::MolarHeatCapacity,
        molar_heat_capacity::joule_per_kelvin_mole, thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::HeatCapacitySegment;

    fn t(k: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(k)
    }

    #[test]
    fn call_delegates_to_data() {
        let data = ThermoData::from_segments([HeatCapacitySegment::constant(
            t(273.0),
            t(373.0),
            MolarHeatCapacity::new::<joule_per_kelvin_mole>(25.0),
        )
        .unwrap()])
        .unwrap();
        let heating = Heating::new(&data);

        let input = HeatingInput {
            amount: AmountOfSubstance::new::<mole>(2.0),
            t_initial: t(373.0),
            t_final: t(273.0),
        };
        assert_relative_eq!(heating.call(&input).unwrap().get::<joule>(), -5000.0);

        let input = HeatingInput {
            t_final: t(400.0),
            ..input
        };
        let err = heating.call(&input).unwrap_err();
        assert_eq!(err.range, data.range());
    }
}
