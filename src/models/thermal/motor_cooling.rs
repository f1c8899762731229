//! Motor cooling budget model.
//!
//! [`MotorCooling`] is the [`twine_core::Model`] adapter; the computation lives
//! in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use mars_motor_cooling::models::thermal::motor_cooling::{Inputs, MotorCooling, Report};
//!
//! let budget = MotorCooling.call(&Inputs::mars_reference()).unwrap();
//! print!("{}", Report(&budget));
//! ```

pub(crate) mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    AchievableDissipation, Atmosphere, CoolingBudget, Equilibrium, EquilibriumConfig,
    EquilibriumError, FlightProfile, FlowRegime, Inputs, Motor, Report, RequiredDissipation,
    equilibrium_temperature,
};

/// Evaluates the cooling budget of a motor at its temperature limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotorCooling;

impl Model for MotorCooling {
    type Input = Inputs;
    type Output = CoolingBudget;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self::core::evaluate(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_delegates_to_core() {
        let inputs = Inputs::mars_reference();
        let budget = MotorCooling.call(&inputs).unwrap();

        assert_eq!(budget, self::core::evaluate(&inputs));
    }
}
