use std::fmt;

use uom::si::{
    amount_of_substance::mole,
    energy::kilojoule,
    f64::{AmountOfSubstance, Energy, MolarHeatCapacity, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{TemperatureOutOfRange, TemperatureRange};

/// Heat capacity from a Shomate fit over a bounded temperature range.
///
/// Coefficients `A..H` follow the NIST WebBook convention, with the reduced
/// temperature `t = T / 1000`:
///
/// - `cp = A + B·t + C·t² + D·t³ + E/t²` in J/(mol·K)
/// - `ΔH` in kJ/mol from the antiderivative of `cp`
///
/// `F`, `G` and `H` are stored for completeness but do not contribute to `ΔH`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shomate {
    range: TemperatureRange,
    coefficients: [f64; 8],
}

impl Shomate {
    pub(super) fn new(range: TemperatureRange, coefficients: [f64; 8]) -> Self {
        Self {
            range,
            coefficients,
        }
    }

    #[must_use]
    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    /// Returns the coefficients `[A, B, C, D, E, F, G, H]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 8] {
        self.coefficients
    }

    /// Computes the enthalpy change of `amount` heated from `t_initial` to `t_final`.
    ///
    /// The reciprocal term is evaluated as `E·(1/t₂ − 1/t₁)`.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if either temperature is outside the fit range.
    pub fn delta_h(
        &self,
        amount: AmountOfSubstance,
        t_initial: ThermodynamicTemperature,
        t_final: ThermodynamicTemperature,
    ) -> Result<Energy, TemperatureOutOfRange> {
        self.range.check(t_initial, t_final)?;

        let t1 = t_initial.get::<kelvin>() / 1000.0;
        let t2 = t_final.get::<kelvin>() / 1000.0;
        let [a, b, c, d, e, ..] = self.coefficients;

        let per_mole = a * (t2 - t1)
            + b / 2.0 * (t2.powi(2) - t1.powi(2))
            + c / 3.0 * (t2.powi(3) - t1.powi(3))
            + d / 4.0 * (t2.powi(4) - t1.powi(4))
            + e / t2
            - e / t1;

        Ok(Energy::new::<kilojoule>(amount.get::<mole>() * per_mole))
    }

    /// Returns the molar heat capacity at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if `temperature` is outside the fit range.
    pub fn cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, TemperatureOutOfRange> {
        self.range.check(temperature, temperature)?;

        let t = temperature.get::<kelvin>() / 1000.0;
        let [a, b, c, d, e, ..] = self.coefficients;

        Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(
            a + b * t + c * t.powi(2) + d * t.powi(3) + e / t.powi(2),
        ))
    }
}

impl fmt::Display for Shomate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, f_, g, h] = self.coefficients;
        write!(
            f,
            "Shomate({}, A={a}, B={b}, C={c}, D={d}, E={e}, F={f_}, G={g}, H={h})",
            self.range
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::energy::joule;

    /// NIST Shomate fit for gaseous nitrogen, 100–500 K.
    const NITROGEN_LOW: [f64; 8] = [
        28.98641, 1.853978, -9.647459, 16.63537, 0.000117, -8.671914, 226.4168, 0.0,
    ];

    fn t(k: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(k)
    }

    fn n(moles: f64) -> AmountOfSubstance {
        AmountOfSubstance::new::<mole>(moles)
    }

    fn fit(coefficients: [f64; 8]) -> Shomate {
        Shomate::new(TemperatureRange::new(t(100.0), t(500.0)).unwrap(), coefficients)
    }

    #[test]
    fn constant_term_matches_constant_cp() {
        // With only `A`, the fit reduces to a constant cp in J/(mol·K).
        let shomate = fit([30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        let dh = shomate.delta_h(n(2.0), t(200.0), t(400.0)).unwrap();
        assert_relative_eq!(dh.get::<joule>(), 2.0 * 30.0 * 200.0, epsilon = 1e-9);

        let cp = shomate.cp(t(321.0)).unwrap();
        assert_relative_eq!(cp.get::<joule_per_kelvin_mole>(), 30.0);
    }

    #[test]
    fn polynomial_terms_integrate_in_reduced_temperature() {
        // B·t integrates to B/2·(t₂² − t₁²) with t in thousands of kelvin.
        let shomate = fit([0.0, 8.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        let dh = shomate.delta_h(n(1.0), t(100.0), t(500.0)).unwrap();
        assert_relative_eq!(dh.get::<joule>(), 4.0 * (0.25 - 0.01) * 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn reciprocal_term_is_e_times_inverse_difference() {
        let shomate = fit([0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0]);

        let dh = shomate.delta_h(n(1.0), t(200.0), t(400.0)).unwrap();
        let expected = 2.0 * (1.0 / 0.4 - 1.0 / 0.2) * 1000.0;
        assert_relative_eq!(dh.get::<joule>(), expected, epsilon = 1e-9);
    }

    #[test]
    fn nitrogen_cp_near_room_temperature() {
        let shomate = fit(NITROGEN_LOW);

        let cp = shomate.cp(t(298.15)).unwrap();
        assert_relative_eq!(cp.get::<joule_per_kelvin_mole>(), 29.12, epsilon = 0.01);
    }

    #[test]
    fn reversed_interval_negates() {
        let shomate = fit(NITROGEN_LOW);

        let up = shomate.delta_h(n(3.0), t(150.0), t(450.0)).unwrap();
        let down = shomate.delta_h(n(3.0), t(450.0), t(150.0)).unwrap();
        assert!(up.get::<joule>() > 0.0);
        assert_relative_eq!(up.get::<joule>(), -down.get::<joule>(), epsilon = 1e-9);
    }

    #[test]
    fn rejects_temperatures_outside_fit() {
        let shomate = fit(NITROGEN_LOW);

        let err = shomate.delta_h(n(1.0), t(99.0), t(300.0)).unwrap_err();
        assert_eq!(err.range, shomate.range());
        assert_eq!(err.t_initial, t(99.0));

        assert!(shomate.cp(t(500.1)).is_err());
    }
}
