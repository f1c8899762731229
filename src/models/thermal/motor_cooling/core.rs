//! Heat-dissipation budget for a lumped cylindrical motor.
//!
//! The evaluation is a single linear pass:
//!
//! 1. Surface area and motor-to-ambient span from the inputs.
//! 2. [Required dissipation](RequiredDissipation) from an energy balance.
//! 3. [Achievable dissipation](AchievableDissipation) for each [`FlowRegime`].
//!
//! Nothing is validated here. Degenerate inputs (e.g., a motor limit equal to
//! ambient) produce non-finite values that flow through to the results.

mod achievable;
mod equilibrium;
mod input;
mod report;
mod required;
mod results;

pub use achievable::{AchievableDissipation, FlowRegime};
pub use equilibrium::{Equilibrium, EquilibriumConfig, EquilibriumError, equilibrium_temperature};
pub use input::{Atmosphere, FlightProfile, Inputs, Motor};
pub use report::Report;
pub use required::RequiredDissipation;
pub use results::CoolingBudget;

use tracing::debug;
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, power::watt, ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{convection::Prandtl, units::TemperatureDifference};

use achievable::achievable_dissipation;
use required::required_dissipation;

/// Evaluates the cooling budget at the motor's temperature limit.
#[must_use]
pub fn evaluate(inputs: &Inputs) -> CoolingBudget {
    let air = &inputs.atmosphere;

    let delta_t = inputs.motor.max_temperature.minus(air.temperature);
    let surface_area = inputs.motor.body.surface_area();
    let prandtl = Prandtl::from_properties(air.viscosity, air.cp, air.conductivity);

    let required = required_dissipation(inputs, surface_area, delta_t);
    let [across, down] = FlowRegime::ALL
        .map(|regime| achievable_dissipation(regime, inputs, prandtl, surface_area, delta_t));

    debug!(
        delta_t_k = delta_t.get::<delta_kelvin>(),
        prandtl = prandtl.get::<ratio>(),
        q_required_w = required.q_dot.get::<watt>(),
        h_required = required.h.get::<watt_per_square_meter_kelvin>(),
        h_across = across.h.get::<watt_per_square_meter_kelvin>(),
        h_down = down.h.get::<watt_per_square_meter_kelvin>(),
        "evaluated cooling budget"
    );

    CoolingBudget {
        motor_temperature: inputs.motor.max_temperature,
        ambient_temperature: air.temperature,
        delta_t,
        surface_area,
        prandtl,
        required,
        across,
        down,
    }
}
