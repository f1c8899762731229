//! TOML case files.
//!
//! A case file overrides any subset of the reference inputs. Values are plain
//! numbers in the units named by each key, and every omitted key keeps its
//! reference value:
//!
//! ```toml
//! [motor]
//! rotor_power_w = 4000.0
//!
//! [flight]
//! freestream_velocity_m_per_s = 60.0
//! ```
//!
//! Validation happens here, when numbers become physical inputs. Temperatures
//! are deliberately left unchecked so a zero motor-to-ambient span can still
//! be studied.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
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

use crate::models::thermal::motor_cooling::{Atmosphere, FlightProfile, Inputs, Motor};
use crate::support::{
    constraint::{
        Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
        UnitIntervalLowerOpen,
    },
    geometry::Cylinder,
};

/// Errors that can occur while loading a case file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read case file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse case file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`")]
    Invalid {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },
}

/// A full set of case inputs in file units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseConfig {
    pub motor: MotorConfig,
    pub atmosphere: AtmosphereConfig,
    pub flight: FlightConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotorConfig {
    pub max_temperature_c: f64,
    pub rotor_power_w: f64,
    pub efficiency: f64,
    pub mass_kg: f64,
    pub specific_heat_j_per_kg_k: f64,
    pub radius_m: f64,
    pub height_m: f64,
    pub emissivity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtmosphereConfig {
    pub temperature_c: f64,
    pub density_kg_per_m3: f64,
    pub conductivity_w_per_m_k: f64,
    pub viscosity_pa_s: f64,
    pub cp_j_per_kg_k: f64,
    pub gravity_m_per_s2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlightConfig {
    pub duration_s: f64,
    pub freestream_velocity_m_per_s: f64,
    pub downward_velocity_m_per_s: f64,
}

impl CaseConfig {
    /// Reads and parses a case file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not valid TOML
    /// for a case. Values are not checked until [`CaseConfig::to_inputs`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses a case from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the case as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validates the case and converts it into model inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first value that is out of range.
    pub fn to_inputs(&self) -> Result<Inputs, ConfigError> {
        let CaseConfig {
            motor: m,
            atmosphere: a,
            flight: f,
        } = self;

        let radius = check::<StrictlyPositive>("motor.radius_m", m.radius_m)?;
        let height = check::<StrictlyPositive>("motor.height_m", m.height_m)?;
        let rotor_power = check::<StrictlyPositive>("motor.rotor_power_w", m.rotor_power_w)?;
        let efficiency = check::<UnitIntervalLowerOpen>("motor.efficiency", m.efficiency)?;
        let mass = check::<StrictlyPositive>("motor.mass_kg", m.mass_kg)?;
        let motor_cp = check::<StrictlyPositive>(
            "motor.specific_heat_j_per_kg_k",
            m.specific_heat_j_per_kg_k,
        )?;
        let emissivity = check::<UnitInterval>("motor.emissivity", m.emissivity)?;

        let density = check::<StrictlyPositive>("atmosphere.density_kg_per_m3", a.density_kg_per_m3)?;
        let conductivity = check::<StrictlyPositive>(
            "atmosphere.conductivity_w_per_m_k",
            a.conductivity_w_per_m_k,
        )?;
        let viscosity = check::<StrictlyPositive>("atmosphere.viscosity_pa_s", a.viscosity_pa_s)?;
        let air_cp = check::<StrictlyPositive>("atmosphere.cp_j_per_kg_k", a.cp_j_per_kg_k)?;
        let gravity = check::<NonNegative>("atmosphere.gravity_m_per_s2", a.gravity_m_per_s2)?;

        let duration = check::<StrictlyPositive>("flight.duration_s", f.duration_s)?;
        let freestream = check::<NonNegative>(
            "flight.freestream_velocity_m_per_s",
            f.freestream_velocity_m_per_s,
        )?;
        let downward = check::<NonNegative>(
            "flight.downward_velocity_m_per_s",
            f.downward_velocity_m_per_s,
        )?;

        Ok(Inputs {
            motor: Motor {
                max_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                    m.max_temperature_c,
                ),
                rotor_power: Power::new::<watt>(rotor_power),
                efficiency: Ratio::new::<ratio>(efficiency),
                mass: Mass::new::<kilogram>(mass),
                specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(motor_cp),
                body: Cylinder::new(Length::new::<meter>(radius), Length::new::<meter>(height)),
                emissivity: Ratio::new::<ratio>(emissivity),
            },
            atmosphere: Atmosphere {
                temperature: ThermodynamicTemperature::new::<degree_celsius>(a.temperature_c),
                density: MassDensity::new::<kilogram_per_cubic_meter>(density),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
                viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
                cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(air_cp),
                gravity: Acceleration::new::<meter_per_second_squared>(gravity),
            },
            flight: FlightProfile {
                duration: Time::new::<second>(duration),
                freestream_velocity: Velocity::new::<meter_per_second>(freestream),
                downward_velocity: Velocity::new::<meter_per_second>(downward),
            },
        })
    }
}

fn check<C: Constraint<f64>>(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    Constrained::<f64, C>::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| ConfigError::Invalid { field, source })
}

impl From<&Inputs> for CaseConfig {
    fn from(inputs: &Inputs) -> Self {
        let Inputs {
            motor,
            atmosphere,
            flight,
        } = inputs;

        Self {
            motor: MotorConfig {
                max_temperature_c: motor.max_temperature.get::<degree_celsius>(),
                rotor_power_w: motor.rotor_power.get::<watt>(),
                efficiency: motor.efficiency.get::<ratio>(),
                mass_kg: motor.mass.get::<kilogram>(),
                specific_heat_j_per_kg_k: motor.specific_heat.get::<joule_per_kilogram_kelvin>(),
                radius_m: motor.body.radius.get::<meter>(),
                height_m: motor.body.height.get::<meter>(),
                emissivity: motor.emissivity.get::<ratio>(),
            },
            atmosphere: AtmosphereConfig {
                temperature_c: atmosphere.temperature.get::<degree_celsius>(),
                density_kg_per_m3: atmosphere.density.get::<kilogram_per_cubic_meter>(),
                conductivity_w_per_m_k: atmosphere.conductivity.get::<watt_per_meter_kelvin>(),
                viscosity_pa_s: atmosphere.viscosity.get::<pascal_second>(),
                cp_j_per_kg_k: atmosphere.cp.get::<joule_per_kilogram_kelvin>(),
                gravity_m_per_s2: atmosphere.gravity.get::<meter_per_second_squared>(),
            },
            flight: FlightConfig {
                duration_s: flight.duration.get::<second>(),
                freestream_velocity_m_per_s: flight.freestream_velocity.get::<meter_per_second>(),
                downward_velocity_m_per_s: flight.downward_velocity.get::<meter_per_second>(),
            },
        }
    }
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self::from(&Inputs::mars_reference())
    }
}

impl Default for MotorConfig {
    fn default() -> Self {
        CaseConfig::default().motor
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        CaseConfig::default().atmosphere
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        CaseConfig::default().flight
    }
}
