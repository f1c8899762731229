use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Power;

/// Errors that can occur while searching for an equilibrium temperature.
#[derive(Debug, Error)]
pub enum EquilibriumError {
    /// The surplus has the same sign at both ends of the search span.
    #[error("surplus does not change sign over the search span: lower={lower:?}, upper={upper:?}")]
    NotBracketed {
        /// Surplus with the motor at ambient.
        lower: Power,
        /// Surplus at the top of the search span.
        upper: Power,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Smallest surplus magnitude encountered.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
