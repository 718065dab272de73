use std::fmt;

use uom::{
    ConstZero,
    si::{
        amount_of_substance::mole,
        f64::{AmountOfSubstance, Energy, MolarHeatCapacity, ThermodynamicTemperature},
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::numeric::Tolerances;

use super::{
    ConstructionError, Discontinuity, HeatCapacitySegment, LatentHeat, TemperatureOutOfRange,
    TemperatureRange,
};

/// Validated heat capacity and latent heat data for one substance.
///
/// Segments are sorted by their lower bound and must meet end to end, so the
/// data covers a single contiguous range with no gaps or overlaps. Latent
/// heat events are sorted by temperature and must lie within that range.
///
/// Once built the data is read-only and can be shared freely between callers.
///
/// # Boundary policy
///
/// - At a temperature shared by two segments, the lower segment is used.
/// - A latent heat event is counted when it lies in the half-open interval
///   `[T_low, T_high)` of the (ascending) evaluation interval. An event at the
///   starting temperature of a heating step is crossed once; one at the final
///   temperature is not crossed until the next step starts from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoData {
    segments: Vec<HeatCapacitySegment>,
    latent_heats: Vec<LatentHeat>,
    range: TemperatureRange,
    tolerances: Tolerances,
}

impl ThermoData {
    /// Builds validated data from heat capacity segments and latent heat events.
    ///
    /// Input order does not matter; both sequences are stably sorted.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if no segments are given, if adjacent
    /// segments leave a gap or overlap, or if a latent heat event falls
    /// outside the covered range.
    pub fn new(
        segments: impl IntoIterator<Item = HeatCapacitySegment>,
        latent_heats: impl IntoIterator<Item = LatentHeat>,
    ) -> Result<Self, ConstructionError> {
        Self::with_tolerances(segments, latent_heats, Tolerances::default())
    }

    /// Builds validated data with no latent heat events.
    ///
    /// # Errors
    ///
    /// See [`ThermoData::new`].
    pub fn from_segments(
        segments: impl IntoIterator<Item = HeatCapacitySegment>,
    ) -> Result<Self, ConstructionError> {
        Self::new(segments, [])
    }

    /// Builds validated data using custom tolerances.
    ///
    /// The tolerances decide whether adjacent segment bounds meet and whether
    /// an amount is small enough to treat as zero.
    ///
    /// # Errors
    ///
    /// See [`ThermoData::new`].
    pub fn with_tolerances(
        segments: impl IntoIterator<Item = HeatCapacitySegment>,
        latent_heats: impl IntoIterator<Item = LatentHeat>,
        tolerances: Tolerances,
    ) -> Result<Self, ConstructionError> {
        let mut segments: Vec<_> = segments.into_iter().collect();
        segments.sort_by(|a, b| kelvin_of(a.min()).total_cmp(&kelvin_of(b.min())));

        for pair in segments.windows(2) {
            let upper = pair[0].max();
            let lower = pair[1].min();
            if !tolerances.nearly_equal(kelvin_of(upper), kelvin_of(lower)) {
                let kind = if upper < lower {
                    Discontinuity::Gap
                } else {
                    Discontinuity::Overlap
                };
                return Err(ConstructionError::Discontinuous { kind, upper, lower });
            }
        }

        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return Err(ConstructionError::Empty);
        };
        let range = TemperatureRange::new(first.min(), last.max())?;

        let mut latent_heats: Vec<_> = latent_heats.into_iter().collect();
        latent_heats.sort_by(|a, b| {
            kelvin_of(a.temperature()).total_cmp(&kelvin_of(b.temperature()))
        });

        if let Some(outside) = latent_heats
            .iter()
            .find(|latent| !range.contains(latent.temperature()))
        {
            return Err(ConstructionError::LatentHeatOutOfRange {
                temperature: outside.temperature(),
                range,
            });
        }

        Ok(Self {
            segments,
            latent_heats,
            range,
            tolerances,
        })
    }

    /// Returns the full temperature range covered by the segments.
    #[must_use]
    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    #[must_use]
    pub fn min(&self) -> ThermodynamicTemperature {
        self.range.min()
    }

    #[must_use]
    pub fn max(&self) -> ThermodynamicTemperature {
        self.range.max()
    }

    /// Returns the segments, sorted by lower bound.
    #[must_use]
    pub fn segments(&self) -> &[HeatCapacitySegment] {
        &self.segments
    }

    /// Returns the latent heat events, sorted by temperature.
    #[must_use]
    pub fn latent_heats(&self) -> &[LatentHeat] {
        &self.latent_heats
    }

    /// Computes the enthalpy change of `amount` going from `t_initial` to `t_final`.
    ///
    /// Sums the sensible heat of every segment the interval spans plus every
    /// latent heat event crossed. Cooling returns the negated value of the
    /// corresponding heating step.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if either temperature is outside [`Self::range`].
    pub fn delta_h(
        &self,
        amount: AmountOfSubstance,
        t_initial: ThermodynamicTemperature,
        t_final: ThermodynamicTemperature,
    ) -> Result<Energy, TemperatureOutOfRange> {
        self.range.check(t_initial, t_final)?;

        if self.tolerances.is_zero(amount.get::<mole>()) {
            return Ok(Energy::ZERO);
        }

        let cooling = t_final < t_initial;
        let (low, high) = if cooling {
            (t_final, t_initial)
        } else {
            (t_initial, t_final)
        };

        let latent: Energy = self
            .latent_heats
            .iter()
            .filter(|latent| low <= latent.temperature() && latent.temperature() < high)
            .fold(Energy::ZERO, |sum, latent| sum + latent.delta_h(amount));

        let sensible = self.sensible_heat(amount, low, high)?;

        let total = latent + sensible;
        Ok(if cooling { -total } else { total })
    }

    /// Returns the molar heat capacity at `temperature`.
    ///
    /// At a boundary shared by two segments, the lower segment is used.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureOutOfRange`] if `temperature` is outside [`Self::range`].
    pub fn cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, TemperatureOutOfRange> {
        self.range.check(temperature, temperature)?;

        let index = self.segment_index(temperature);
        let segment = &self.segments[index];
        segment.cp(clamp_min(temperature, segment.min()))
    }

    /// Integrates sensible heat over an ascending interval within the range.
    fn sensible_heat(
        &self,
        amount: AmountOfSubstance,
        low: ThermodynamicTemperature,
        high: ThermodynamicTemperature,
    ) -> Result<Energy, TemperatureOutOfRange> {
        let mut total = Energy::ZERO;
        let mut cursor = low;

        for segment in &self.segments[self.segment_index(low)..] {
            // A segment narrower than the contiguity tolerance can end below
            // the previous upper bound; it has nothing left to contribute.
            if segment.max() < cursor {
                continue;
            }

            // Contiguity is only checked within tolerance, so hand off at
            // whichever of the previous upper bound and this lower bound is higher.
            let from = clamp_min(cursor, segment.min());

            if high <= segment.max() {
                if from < high {
                    total += segment.delta_h(amount, from, high)?;
                }
                break;
            }

            total += segment.delta_h(amount, from, segment.max())?;
            cursor = segment.max();
        }

        Ok(total)
    }

    /// Index of the first segment whose upper bound is at or above `temperature`.
    ///
    /// The caller ensures `temperature` is within range, so the last segment
    /// always qualifies.
    fn segment_index(&self, temperature: ThermodynamicTemperature) -> usize {
        self.segments
            .iter()
            .position(|segment| temperature <= segment.max())
            .unwrap_or(self.segments.len() - 1)
    }
}

impl fmt::Display for ThermoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThermoData({}, [", self.range)?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment}")?;
        }
        f.write_str("], [")?;
        for (i, latent) in self.latent_heats.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{latent}")?;
        }
        f.write_str("])")
    }
}

fn clamp_min(
    temperature: ThermodynamicTemperature,
    min: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    if temperature < min { min } else { temperature }
}

fn kelvin_of(temperature: ThermodynamicTemperature) -> f64 {
    temperature.get::<kelvin>()
}
