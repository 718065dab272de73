use std::fmt;

use uom::si::{
    f64::{AmountOfSubstance, Energy, MolarHeatCapacity, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
};

use crate::support::{
    thermo::{TemperatureOutOfRange, TemperatureRange},
    units::TemperatureDifference,
};

/// Constant molar heat capacity over a bounded temperature range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCp {
    range: TemperatureRange,
    cp: MolarHeatCapacity,
}

impl ConstantCp {
    pub(super) fn new(range: TemperatureRange, cp: MolarHeatCapacity) -> Self {
        Self { range, cp }
    }

    #[must_use]
    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    /// Computes the enthalpy change using `ΔH = n·cp·(T₂ − T₁)`.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if either temperature is outside the range.
    pub fn delta_h(
        &self,
        amount: AmountOfSubstance,
        t_initial: ThermodynamicTemperature,
        t_final: ThermodynamicTemperature,
    ) -> Result<Energy, TemperatureOutOfRange> {
        self.range.check(t_initial, t_final)?;
        Ok(amount * (self.cp * t_final.minus(t_initial)))
    }

    /// Returns the constant heat capacity.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if `temperature` is outside the range.
    pub fn cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, TemperatureOutOfRange> {
        self.range.check(temperature, temperature)?;
        Ok(self.cp)
    }
}

impl fmt::Display for ConstantCp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConstantCp({}, cp={} J/(mol·K))",
            self.range,
            self.cp.get::<joule_per_kelvin_mole>()
        )
    }
}
