//! Heat the airflow can actually carry away.

use std::fmt;

use uom::si::f64::{Area, HeatTransfer, Power, TemperatureInterval};

use crate::support::convection::{self, Nusselt, Prandtl, Reynolds};

use super::Inputs;

/// Airflow geometry relative to the motor's axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// Freestream crossing the cylinder, characterized by its diameter.
    AcrossCylinder,
    /// Rotor downwash running along the cylinder, treated as a flat plate of the motor's height.
    DownCylinder,
}

impl FlowRegime {
    /// Both regimes, in report order.
    pub const ALL: [Self; 2] = [Self::AcrossCylinder, Self::DownCylinder];
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AcrossCylinder => f.write_str("across cylinder"),
            Self::DownCylinder => f.write_str("down cylinder"),
        }
    }
}

/// Convective performance of one flow regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievableDissipation {
    pub regime: FlowRegime,
    pub reynolds: Reynolds,
    pub nusselt: Nusselt,
    pub h: HeatTransfer,

    /// Heat rate convection removes over the full motor surface.
    pub q_dot: Power,
}

pub(super) fn achievable_dissipation(
    regime: FlowRegime,
    inputs: &Inputs,
    prandtl: Prandtl,
    area: Area,
    delta_t: TemperatureInterval,
) -> AchievableDissipation {
    let air = &inputs.atmosphere;
    let body = &inputs.motor.body;

    let (length, velocity) = match regime {
        FlowRegime::AcrossCylinder => (body.diameter(), inputs.flight.freestream_velocity),
        FlowRegime::DownCylinder => (body.height, inputs.flight.downward_velocity),
    };

    let reynolds = Reynolds::from_flow(air.density, velocity, length, air.viscosity);
    let nusselt = match regime {
        FlowRegime::AcrossCylinder => convection::churchill_bernstein(reynolds, prandtl),
        FlowRegime::DownCylinder => convection::laminar_flat_plate(reynolds, prandtl),
    };
    let h = convection::coefficient(nusselt, air.conductivity, length);

    AchievableDissipation {
        regime,
        reynolds,
        nusselt,
        h,
        q_dot: convection::heat_rate(h, area, delta_t),
    }
}
