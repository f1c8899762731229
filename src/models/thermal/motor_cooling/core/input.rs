//! Input types for the motor cooling budget.

use uom::si::{
    acceleration::meter_per_second_squared,
    dynamic_viscosity::pascal_second,
    f64::{
        Acceleration, DynamicViscosity, Length, Mass, MassDensity, Power, Ratio,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature, Time, Velocity,
    },
    length::meter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
    velocity::meter_per_second,
};

use crate::support::geometry::Cylinder;

/// Everything the budget needs: the motor, the air around it, and how it flies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub motor: Motor,
    pub atmosphere: Atmosphere,
    pub flight: FlightProfile,
}

/// The motor, modeled as a single lumped cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motor {
    /// Highest temperature the motor may reach by the end of the flight.
    pub max_temperature: ThermodynamicTemperature,

    /// Mechanical power delivered to the rotor.
    pub rotor_power: Power,

    /// Fraction of electrical input power delivered to the rotor.
    pub efficiency: Ratio,

    /// Lumped mass that absorbs heat during the flight.
    pub mass: Mass,

    /// Specific heat of the motor material.
    pub specific_heat: SpecificHeatCapacity,

    /// Exterior shape; sets the wetted area and the flow lengths.
    pub body: Cylinder,

    /// Surface emissivity for the radiative loss.
    pub emissivity: Ratio,
}

/// Ambient gas state and transport properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Ambient gas temperature, also the radiative sink.
    pub temperature: ThermodynamicTemperature,

    /// Gas density.
    pub density: MassDensity,

    /// Gas thermal conductivity.
    pub conductivity: ThermalConductivity,

    /// Gas dynamic viscosity.
    pub viscosity: DynamicViscosity,

    /// Gas specific heat at constant pressure.
    pub cp: SpecificHeatCapacity,

    /// Surface gravity; no forced-convection correlation depends on it.
    pub gravity: Acceleration,
}

/// Duration and airflow of a single flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightProfile {
    /// Time at full power; the motor must stay under its limit until the end.
    pub duration: Time,

    /// Airspeed across the motor's axis (cross-flow).
    pub freestream_velocity: Velocity,

    /// Rotor downwash along the motor's axis.
    pub downward_velocity: Velocity,
}

impl Inputs {
    /// Reference case: a 5.6 kW rotor motor on a ten-minute Martian flight.
    #[must_use]
    pub fn mars_reference() -> Self {
        Self {
            motor: Motor {
                max_temperature: ThermodynamicTemperature::new::<degree_celsius>(50.0),
                rotor_power: Power::new::<watt>(5578.0),
                efficiency: Ratio::new::<ratio>(0.85),
                mass: Mass::new::<kilogram>(0.75),
                specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(100.0),
                body: Cylinder::new(Length::new::<meter>(0.05), Length::new::<meter>(0.2)),
                emissivity: Ratio::new::<ratio>(0.98),
            },
            atmosphere: Atmosphere {
                temperature: ThermodynamicTemperature::new::<degree_celsius>(-50.0),
                density: MassDensity::new::<kilogram_per_cubic_meter>(0.0139),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0096),
                viscosity: DynamicViscosity::new::<pascal_second>(1.422e-5),
                cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(730.0),
                gravity: Acceleration::new::<meter_per_second_squared>(3.711),
            },
            flight: FlightProfile {
                duration: Time::new::<second>(600.0),
                freestream_velocity: Velocity::new::<meter_per_second>(40.0),
                downward_velocity: Velocity::new::<meter_per_second>(40.0),
            },
        }
    }

    /// Returns a copy with the motor temperature replaced.
    #[must_use]
    pub fn with_motor_temperature(mut self, temperature: ThermodynamicTemperature) -> Self {
        self.motor.max_temperature = temperature;
        self
    }

    /// Returns a copy with the cross-flow airspeed replaced.
    #[must_use]
    pub fn with_freestream_velocity(mut self, velocity: Velocity) -> Self {
        self.flight.freestream_velocity = velocity;
        self
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self::mars_reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    #[allow(clippy::float_cmp)]
    fn celsius_converted_to_kelvin_once() {
        let inputs = Inputs::mars_reference();

        assert_eq!(inputs.motor.max_temperature.get::<kelvin>(), 50.0 + 273.15);
        assert_eq!(inputs.atmosphere.temperature.get::<kelvin>(), -50.0 + 273.15);

        // Reading back in Celsius undoes the offset rather than applying it again.
        assert_eq!(inputs.motor.max_temperature.get::<degree_celsius>(), 50.0);
    }

    #[test]
    fn overrides_leave_other_fields_alone() {
        let base = Inputs::mars_reference();
        let hotter =
            base.with_motor_temperature(ThermodynamicTemperature::new::<degree_celsius>(80.0));

        assert_eq!(hotter.atmosphere, base.atmosphere);
        assert_eq!(hotter.flight, base.flight);
        assert_ne!(hotter.motor, base.motor);
    }
}
