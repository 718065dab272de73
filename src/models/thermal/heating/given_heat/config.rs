use twine_solvers::equation::bisection;
use uom::si::{
    energy::joule,
    f64::{Energy, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

/// Convergence settings for the final-temperature search.
///
/// The search stops once the bracket on the final temperature is narrower
/// than `temperature_tol`, or once the heat residual falls within
/// `heat_abs_tol + heat_rel_tol·|target|`. The relative part keeps the
/// acceptance criterion meaningful for both a few joules and many megajoules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivenHeatConfig {
    pub max_iters: usize,
    pub temperature_tol: TemperatureInterval,
    pub heat_abs_tol: Energy,
    pub heat_rel_tol: f64,
}

impl Default for GivenHeatConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            heat_abs_tol: Energy::new::<joule>(1e-9),
            heat_rel_tol: 1e-12,
        }
    }
}

impl GivenHeatConfig {
    /// Residual tolerance accepted when solving for `target`.
    #[must_use]
    pub fn heat_tol(&self, target: Energy) -> Energy {
        self.heat_abs_tol + target.abs() * self.heat_rel_tol
    }

    pub(super) fn bisection(&self, target: Energy) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temperature_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.heat_tol(target).get::<joule>(),
        }
    }
}
