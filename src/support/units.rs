//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] SI quantities. Molar
//! quantities use the built-in [`MolarEnergy`](uom::si::f64::MolarEnergy) and
//! [`MolarHeatCapacity`](uom::si::f64::MolarHeatCapacity) types.
//!
//! [`uom`] deliberately does not subtract two absolute temperatures, so the
//! [`TemperatureDifference`] trait fills that gap for sensible heat terms
//! such as `cp·(T₂ − T₁)`.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Subtracts one absolute temperature from another.
///
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380) for why this
/// is not provided by [`uom`] itself.
pub trait TemperatureDifference {
    /// Returns the interval `self − other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<kelvin>() - other.get::<kelvin>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        amount_of_substance::mole,
        energy::joule,
        f64::{AmountOfSubstance, Energy, MolarHeatCapacity},
        molar_heat_capacity::joule_per_kelvin_mole,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn interval_sign_follows_order() {
        let boiling = ThermodynamicTemperature::new::<kelvin>(373.15);
        let freezing = ThermodynamicTemperature::new::<degree_celsius>(0.0);

        assert_relative_eq!(boiling.minus(freezing).get::<delta_kelvin>(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(freezing.minus(boiling).get::<delta_kelvin>(), -100.0, epsilon = 1e-9);
    }

    #[test]
    fn sensible_heat_has_energy_units() {
        let cp = MolarHeatCapacity::new::<joule_per_kelvin_mole>(25.0);
        let n = AmountOfSubstance::new::<mole>(2.0);
        let t1 = ThermodynamicTemperature::new::<kelvin>(273.0);
        let t2 = ThermodynamicTemperature::new::<kelvin>(373.0);

        let q: Energy = n * (cp * t2.minus(t1));
        assert_relative_eq!(q.get::<joule>(), 5000.0, epsilon = 1e-9);
    }
}
