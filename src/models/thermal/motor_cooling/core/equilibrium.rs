//! Steady motor temperature under a given airflow.
//!
//! Raising the motor temperature increases both the convective span and the
//! radiative and accumulated losses, so the achievable-minus-required surplus
//! climbs monotonically from `−P_dis` at ambient. Bisection on the motor
//! temperature finds where it crosses zero.

mod config;
mod error;
mod problem;

pub use config::EquilibriumConfig;
pub use error::EquilibriumError;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{CoolingBudget, FlowRegime, Inputs, evaluate};

use problem::{EquilibriumModel, EquilibriumProblem};

/// Motor temperature at which one flow regime exactly removes the required heat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    pub regime: FlowRegime,
    pub temperature: ThermodynamicTemperature,

    /// Full budget evaluated at [`temperature`](Self::temperature).
    pub budget: CoolingBudget,
}

/// Finds the motor temperature where the `regime` surplus is zero.
///
/// The search spans from ambient up to ambient plus
/// [`EquilibriumConfig::search_span`]; every other input is held fixed.
/// A motor with no losses balances at ambient and returns it directly.
///
/// # Errors
///
/// Returns [`EquilibriumError`] if the surplus does not change sign across the
/// search span or if the solver fails to converge.
pub fn equilibrium_temperature(
    inputs: &Inputs,
    regime: FlowRegime,
    config: EquilibriumConfig,
) -> Result<Equilibrium, EquilibriumError> {
    let ambient = inputs.atmosphere.temperature.get::<kelvin>();
    let bracket = [ambient, ambient + config.search_span.get::<delta_kelvin>()];

    let budget_at = |t: f64| {
        evaluate(&inputs.with_motor_temperature(ThermodynamicTemperature::new::<kelvin>(t)))
    };

    // Bisection needs a strict sign change, and an exact zero at either end is
    // already the answer.
    let ends = bracket.map(budget_at);
    if let Some(budget) = ends.into_iter().find(|b| b.surplus(regime).get::<watt>() == 0.0) {
        debug!(
            %regime,
            temperature_k = budget.motor_temperature.get::<kelvin>(),
            "surplus is zero at a search bound"
        );
        return Ok(Equilibrium {
            regime,
            temperature: budget.motor_temperature,
            budget,
        });
    }

    let [lower, upper] = ends.map(|b| b.surplus(regime));
    let bracketed = lower.get::<watt>() < 0.0 && upper.get::<watt>() > 0.0;
    if !bracketed {
        return Err(EquilibriumError::NotBracketed { lower, upper });
    }

    let model = EquilibriumModel::new(inputs);
    let problem = EquilibriumProblem::new(regime);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(EquilibriumError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    let budget = solution.snapshot.output;
    debug!(
        %regime,
        temperature_k = budget.motor_temperature.get::<kelvin>(),
        iters = solution.iters,
        "found equilibrium temperature"
    );

    Ok(Equilibrium {
        regime,
        temperature: budget.motor_temperature,
        budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Ratio, TemperatureInterval},
        ratio::ratio,
    };

    #[test]
    fn reference_motor_equilibria() {
        let inputs = Inputs::mars_reference();

        let across =
            equilibrium_temperature(&inputs, FlowRegime::AcrossCylinder, EquilibriumConfig::default())
                .expect("cross-flow equilibrium should converge");
        let down =
            equilibrium_temperature(&inputs, FlowRegime::DownCylinder, EquilibriumConfig::default())
                .expect("axial-flow equilibrium should converge");

        assert_relative_eq!(across.temperature.get::<kelvin>(), 657.573_722_189_986_7, epsilon = 1e-6);
        assert_relative_eq!(down.temperature.get::<kelvin>(), 662.450_258_579_794_1, epsilon = 1e-6);

        // Cross-flow has the larger coefficient, so it settles cooler.
        assert!(across.temperature < down.temperature);
    }

    #[test]
    fn surplus_vanishes_at_equilibrium() {
        let inputs = Inputs::mars_reference();

        for regime in FlowRegime::ALL {
            let equilibrium =
                equilibrium_temperature(&inputs, regime, EquilibriumConfig::default()).unwrap();

            assert_eq!(equilibrium.regime, regime);
            assert!(equilibrium.budget.surplus(regime).get::<watt>().abs() < 1e-6);
            assert!(equilibrium.temperature > inputs.motor.max_temperature);
        }
    }

    #[test]
    fn lossless_motor_settles_at_ambient() {
        let mut inputs = Inputs::mars_reference();
        inputs.motor.efficiency = Ratio::new::<ratio>(1.0);

        for regime in FlowRegime::ALL {
            let equilibrium = equilibrium_temperature(&inputs, regime, EquilibriumConfig::default())
                .expect("a motor with no losses is in balance at ambient");

            assert_eq!(equilibrium.temperature, inputs.atmosphere.temperature);
            assert_eq!(equilibrium.budget.surplus(regime).get::<watt>(), 0.0);
        }
    }

    #[test]
    fn short_search_span_is_not_bracketed() {
        let config = EquilibriumConfig {
            search_span: TemperatureInterval::new::<delta_kelvin>(10.0),
            ..EquilibriumConfig::default()
        };

        let err = equilibrium_temperature(&Inputs::mars_reference(), FlowRegime::DownCylinder, config)
            .expect_err("surplus stays negative within 10 K of ambient");

        match err {
            EquilibriumError::NotBracketed { lower, upper } => {
                assert!(lower.get::<watt>() < 0.0);
                assert!(upper.get::<watt>() < 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
