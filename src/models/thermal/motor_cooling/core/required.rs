//! Heat the airflow must carry away to hold the motor at its limit.

use uom::si::f64::{Area, HeatTransfer, Power, TemperatureInterval};

use crate::support::radiation::net_radiated_power;

use super::Inputs;

/// Energy balance on the motor over one flight.
///
/// `q_dot = dissipated − accumulated − radiated` is what convection has to remove.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequiredDissipation {
    /// Electrical losses, `P_rotor/η − P_rotor`.
    pub dissipated: Power,

    /// Average rate at which the motor body soaks up heat while warming from
    /// ambient to its limit over the flight.
    pub accumulated: Power,

    /// Net radiation to the surroundings at the temperature limit.
    pub radiated: Power,

    /// Heat rate convection must remove.
    pub q_dot: Power,

    /// Convective coefficient that would remove `q_dot` across the full span.
    ///
    /// Non-finite when the motor limit equals the ambient temperature.
    pub h: HeatTransfer,
}

pub(super) fn required_dissipation(
    inputs: &Inputs,
    area: Area,
    delta_t: TemperatureInterval,
) -> RequiredDissipation {
    let motor = &inputs.motor;

    let dissipated = motor.rotor_power / motor.efficiency - motor.rotor_power;
    let accumulated = motor.mass * motor.specific_heat * delta_t / inputs.flight.duration;
    let radiated = net_radiated_power(
        motor.emissivity,
        area,
        motor.max_temperature,
        inputs.atmosphere.temperature,
    );

    let q_dot = dissipated - accumulated - radiated;
    let h = q_dot / (area * delta_t);

    RequiredDissipation {
        dissipated,
        accumulated,
        radiated,
        q_dot,
        h,
    }
}
