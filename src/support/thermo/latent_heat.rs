use std::fmt;

use uom::si::{
    f64::{AmountOfSubstance, Energy, MolarEnergy, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    thermodynamic_temperature::kelvin,
};

/// Latent heat of a phase transition at a fixed temperature.
///
/// Positive enthalpy is absorbed when the transition is crossed while heating
/// (melting, boiling) and released when crossed while cooling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatentHeat {
    temperature: ThermodynamicTemperature,
    enthalpy: MolarEnergy,
}

impl LatentHeat {
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, enthalpy: MolarEnergy) -> Self {
        Self {
            temperature,
            enthalpy,
        }
    }

    /// Returns the transition temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the molar enthalpy of the transition.
    #[must_use]
    pub fn enthalpy(&self) -> MolarEnergy {
        self.enthalpy
    }

    /// Returns the heat absorbed by `amount` undergoing the transition.
    #[must_use]
    pub fn delta_h(&self, amount: AmountOfSubstance) -> Energy {
        amount * self.enthalpy
    }
}

impl fmt::Display for LatentHeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LatentHeat({} K, {} J/mol)",
            self.temperature.get::<kelvin>(),
            self.enthalpy.get::<joule_per_mole>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{amount_of_substance::mole, energy::joule};

    #[test]
    fn scales_with_amount() {
        let boiling = LatentHeat::new(
            ThermodynamicTemperature::new::<kelvin>(373.15),
            MolarEnergy::new::<joule_per_mole>(40_650.0),
        );

        let q = boiling.delta_h(AmountOfSubstance::new::<mole>(0.5));
        assert_relative_eq!(q.get::<joule>(), 20_325.0);

        let q = boiling.delta_h(AmountOfSubstance::new::<mole>(-2.0));
        assert_relative_eq!(q.get::<joule>(), -81_300.0);

        assert_eq!(boiling.to_string(), "LatentHeat(373.15 K, 40650 J/mol)");
    }
}
