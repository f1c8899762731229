//! Problem formulation for the equilibrium temperature search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::ThermodynamicTemperature, power::watt, thermodynamic_temperature::kelvin};

use crate::models::thermal::motor_cooling::core::{CoolingBudget, FlowRegime, Inputs, evaluate};

/// Budget evaluated with the motor temperature as the sole input.
pub(super) struct EquilibriumModel<'a> {
    inputs: &'a Inputs,
}

impl<'a> EquilibriumModel<'a> {
    pub(super) fn new(inputs: &'a Inputs) -> Self {
        Self { inputs }
    }
}

impl Model for EquilibriumModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = CoolingBudget;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(evaluate(&self.inputs.with_motor_temperature(*input)))
    }
}

/// Residual is the regime's surplus, `achievable − required`, in watts.
pub(super) struct EquilibriumProblem {
    regime: FlowRegime,
}

impl EquilibriumProblem {
    pub(super) fn new(regime: FlowRegime) -> Self {
        Self { regime }
    }
}

impl EquationProblem<1> for EquilibriumProblem {
    type Input = ThermodynamicTemperature;
    type Output = CoolingBudget;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.surplus(self.regime).get::<watt>()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn model_overrides_only_motor_temperature() {
        let inputs = Inputs::mars_reference();
        let model = EquilibriumModel::new(&inputs);

        let budget = model
            .call(&ThermodynamicTemperature::new::<degree_celsius>(50.0))
            .unwrap();

        assert_eq!(budget, evaluate(&inputs));
    }

    #[test]
    fn residual_is_surplus_in_watts() {
        let problem = EquilibriumProblem::new(FlowRegime::DownCylinder);
        let input = problem.input(&[400.0]).unwrap();
        assert_relative_eq!(input.get::<kelvin>(), 400.0);

        let budget = evaluate(&Inputs::mars_reference().with_motor_temperature(input));
        let [residual] = problem.residuals(&input, &budget).unwrap();

        assert_relative_eq!(
            residual,
            (budget.down.q_dot - budget.required.q_dot).get::<watt>()
        );
    }
}
