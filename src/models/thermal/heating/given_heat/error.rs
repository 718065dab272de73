use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::{energy::joule, f64::Energy};

use crate::support::thermo::TemperatureOutOfRange;

/// Errors that can occur while solving for the temperature reached by a heat input.
#[derive(Debug, Error)]
pub enum GivenHeatError {
    /// The initial temperature, or a trial temperature, is outside the data range.
    #[error("heat evaluation failed")]
    Evaluation(#[from] TemperatureOutOfRange),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The data range cannot absorb or release the requested heat.
    #[error(
        "requested heat of {} J exceeds the {} J available within the data range",
        .heat.get::<joule>(),
        .available.get::<joule>()
    )]
    Unreachable {
        heat: Energy,
        /// Heat exchanged when moving from the initial temperature to the
        /// range edge that `heat` drives the substance toward.
        available: Energy,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={} J", .residual.get::<joule>())]
    MaxIters {
        /// Heat residual at the best iterate.
        residual: Energy,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
