//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (temperature, power,
//! transport properties, geometry).
//! This module provides extensions that the budget needs but [`uom`] lacks.
//!
//! ## Temperature differences
//!
//! The motor-to-ambient span drives every convective term, and it is the
//! difference of two absolute temperatures:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval::kelvin, thermodynamic_temperature::degree_celsius};
//! use mars_motor_cooling::support::units::TemperatureDifference;
//!
//! let motor = ThermodynamicTemperature::new::<degree_celsius>(50.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(-50.0);
//! let delta_t = motor.minus(ambient);
//! assert!((delta_t.get::<kelvin>() - 100.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
