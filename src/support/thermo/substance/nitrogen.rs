use super::{SegmentRow, Substance};

/// Gaseous nitrogen (N₂), 100–2000 K.
///
/// Shomate coefficients from the NIST Chemistry WebBook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nitrogen;

impl Substance for Nitrogen {
    const HEAT_CAPACITY: &'static [SegmentRow] = &[
        SegmentRow {
            min_kelvin: 100.0,
            max_kelvin: 500.0,
            coefficients: &[
                28.98641, 1.853978, -9.647459, 16.63537, 0.000117, -8.671914, 226.4168, 0.0,
            ],
        },
        SegmentRow {
            min_kelvin: 500.0,
            max_kelvin: 2000.0,
            coefficients: &[
                19.50583, 19.88705, -8.598535, 1.369784, 0.527601, -4.935202, 212.3900, 0.0,
            ],
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        amount_of_substance::mole,
        energy::joule,
        f64::{AmountOfSubstance, ThermodynamicTemperature},
        molar_heat_capacity::joule_per_kelvin_mole,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::ThermoData;

    fn t(k: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(k)
    }

    #[test]
    fn cp_is_continuous_across_fits() {
        let data = ThermoData::of::<Nitrogen>().unwrap();

        let cp = |k| data.cp(t(k)).unwrap().get::<joule_per_kelvin_mole>();
        assert_relative_eq!(cp(298.15), 29.124, epsilon = 1e-3);
        assert_relative_eq!(cp(500.0), cp(500.000_001), epsilon = 1e-3);
        assert_relative_eq!(cp(1000.0), 32.692, epsilon = 1e-3);
    }

    #[test]
    fn heating_spans_both_fits() {
        let data = ThermoData::of::<Nitrogen>().unwrap();
        let n = AmountOfSubstance::new::<mole>(1.0);

        let dh = data.delta_h(n, t(298.15), t(1000.0)).unwrap();
        assert_relative_eq!(dh.get::<joule>(), 20_406.504_867, epsilon = 1e-5);

        let low = data.delta_h(n, t(298.15), t(500.0)).unwrap();
        let high = data.delta_h(n, t(500.0), t(1000.0)).unwrap();
        assert_relative_eq!((low + high).get::<joule>(), dh.get::<joule>(), epsilon = 1e-9);
    }
}
