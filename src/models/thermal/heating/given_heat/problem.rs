//! Problem formulation for the given-heat temperature search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    energy::joule,
    f64::{AmountOfSubstance, Energy, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{TemperatureOutOfRange, ThermoData};

/// A trial final temperature and the heat needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Heated {
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) heat: Energy,
}

/// Model adapter exposing the final temperature as the sole input.
pub(super) struct GivenHeatModel<'a> {
    data: &'a ThermoData,
    amount: AmountOfSubstance,
    t_initial: ThermodynamicTemperature,
}

impl<'a> GivenHeatModel<'a> {
    pub(super) fn new(
        data: &'a ThermoData,
        amount: AmountOfSubstance,
        t_initial: ThermodynamicTemperature,
    ) -> Self {
        Self {
            data,
            amount,
            t_initial,
        }
    }
}

impl Model for GivenHeatModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = Heated;
    type Error = TemperatureOutOfRange;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let heat = self.data.delta_h(self.amount, self.t_initial, *input)?;
        Ok(Heated {
            temperature: *input,
            heat,
        })
    }
}

/// Equation problem for matching a target heat.
///
/// Computes the residual as `achieved_heat - target_heat`.
pub(super) struct GivenHeatProblem {
    target: Energy,
}

impl GivenHeatProblem {
    pub(super) fn new(target: Energy) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenHeatProblem {
    type Input = ThermodynamicTemperature;
    type Output = Heated;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.heat.get::<joule>() - self.target.get::<joule>()])
    }
}
