//! Results of a cooling budget evaluation.

use uom::si::f64::{Area, Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::convection::Prandtl;

use super::{AchievableDissipation, FlowRegime, RequiredDissipation};

/// Required and achievable convective heat rates for one motor temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingBudget {
    /// Motor temperature the budget was evaluated at.
    pub motor_temperature: ThermodynamicTemperature,

    pub ambient_temperature: ThermodynamicTemperature,

    /// Motor-to-ambient span driving every convective term.
    pub delta_t: TemperatureInterval,

    /// Exposed motor surface (no fins).
    pub surface_area: Area,

    pub prandtl: Prandtl,
    pub required: RequiredDissipation,
    pub across: AchievableDissipation,
    pub down: AchievableDissipation,
}

impl CoolingBudget {
    /// Returns the achievable dissipation for a flow regime.
    #[must_use]
    pub fn achievable(&self, regime: FlowRegime) -> &AchievableDissipation {
        match regime {
            FlowRegime::AcrossCylinder => &self.across,
            FlowRegime::DownCylinder => &self.down,
        }
    }

    /// Achievable minus required heat rate for a flow regime.
    ///
    /// Positive when the airflow can hold the motor at this temperature.
    #[must_use]
    pub fn surplus(&self, regime: FlowRegime) -> Power {
        self.achievable(regime).q_dot - self.required.q_dot
    }
}
