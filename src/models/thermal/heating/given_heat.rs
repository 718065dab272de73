//! Iterative solve for the temperature reached after a given heat input.
//!
//! Bisects on the final temperature until the enthalpy change from the
//! initial temperature matches the target heat.

mod config;
mod error;
mod problem;

pub use config::GivenHeatConfig;
pub use error::GivenHeatError;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        energy::joule,
        f64::{AmountOfSubstance, Energy, ThermodynamicTemperature},
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::thermo::ThermoData;

use problem::{GivenHeatModel, GivenHeatProblem};

/// Solves for the final temperature given a heat input.
///
/// The search bracket runs from `t_initial` to whichever end of the data
/// range the heat drives the substance toward.
///
/// # Errors
///
/// Returns [`GivenHeatError`] on out-of-range evaluation, unreachable targets,
/// or solver failure.
pub(super) fn given_heat(
    data: &ThermoData,
    amount: AmountOfSubstance,
    t_initial: ThermodynamicTemperature,
    heat: Energy,
    config: GivenHeatConfig,
) -> Result<ThermodynamicTemperature, GivenHeatError> {
    data.range().check(t_initial, t_initial)?;

    if heat == Energy::ZERO {
        return Ok(t_initial);
    }

    // A negative amount absorbs heat while cooling, so the search heads
    // toward the top of the range only when heat and amount share a sign.
    let rising = (heat > Energy::ZERO) == (amount > AmountOfSubstance::ZERO);
    let edge = if rising { data.max() } else { data.min() };

    let available = data.delta_h(amount, t_initial, edge)?;
    let reachable = if heat > Energy::ZERO {
        heat <= available
    } else {
        heat >= available
    };
    if !reachable {
        return Err(GivenHeatError::Unreachable { heat, available });
    }

    let model = GivenHeatModel::new(data, amount, t_initial);
    let problem = GivenHeatProblem::new(heat);

    let (a, b) = (t_initial.get::<kelvin>(), edge.get::<kelvin>());
    let solution = bisection::solve(
        &model,
        &problem,
        [a.min(b), a.max(b)],
        &config.bisection(heat),
        |event: &bisection::Event<'_, _, _>| {
            // The bracket lies inside the data range, so evaluation only fails
            // on a malformed candidate; steer away from it as an overshoot.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenHeatError::MaxIters {
            residual: Energy::new::<joule>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.temperature)
}
