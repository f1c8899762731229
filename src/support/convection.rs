//! Forced-convection correlations.
//!
//! Dimensionless groups are built from [`uom`] quantities, so a mismatched
//! property (e.g., kinematic instead of dynamic viscosity) fails to compile
//! rather than producing a silently wrong number. The empirical correlations
//! themselves work on the raw ratios.
//!
//! None of the functions here validate their inputs. A zero length or a
//! negative velocity produces a non-finite result that propagates to the caller.
//!
//! # Example
//!
//! ```
//! use mars_motor_cooling::support::convection::{self, Prandtl, Reynolds};
//! use uom::si::{
//!     dynamic_viscosity::pascal_second,
//!     f64::{DynamicViscosity, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity, Velocity},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     velocity::meter_per_second,
//! };
//!
//! let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0096);
//! let mu = DynamicViscosity::new::<pascal_second>(1.422e-5);
//! let diameter = Length::new::<meter>(0.1);
//!
//! let re = Reynolds::from_flow(
//!     MassDensity::new::<kilogram_per_cubic_meter>(0.0139),
//!     Velocity::new::<meter_per_second>(40.0),
//!     diameter,
//!     mu,
//! );
//! let pr = Prandtl::from_properties(mu, SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(730.0), k);
//!
//! let nu = convection::churchill_bernstein(re, pr);
//! let h = convection::coefficient(nu, k, diameter);
//! assert!(h.get::<watt_per_square_meter_kelvin>() > 0.0);
//! ```

use std::ops::Deref;

use uom::si::{
    f64::{
        Area, DynamicViscosity, HeatTransfer, Length, MassDensity, Power, Ratio,
        SpecificHeatCapacity, TemperatureInterval, ThermalConductivity, Velocity,
    },
    ratio::ratio,
};

/// Reynolds number `ρ·v·L / μ` for a flow over a characteristic length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reynolds(Ratio);

impl Reynolds {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Ratio::new::<ratio>(value))
    }

    /// Builds the Reynolds number from fluid properties and flow conditions.
    #[must_use]
    pub fn from_flow(
        density: MassDensity,
        velocity: Velocity,
        length: Length,
        viscosity: DynamicViscosity,
    ) -> Self {
        Self(density * velocity * length / viscosity)
    }
}

impl Deref for Reynolds {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Prandtl number `μ·c_p / k` of a fluid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Prandtl(Ratio);

impl Prandtl {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Ratio::new::<ratio>(value))
    }

    /// Builds the Prandtl number from fluid transport properties.
    #[must_use]
    pub fn from_properties(
        viscosity: DynamicViscosity,
        cp: SpecificHeatCapacity,
        conductivity: ThermalConductivity,
    ) -> Self {
        Self(viscosity * cp / conductivity)
    }
}

impl Deref for Prandtl {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Average Nusselt number over a heated surface.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Nusselt(Ratio);

impl Nusselt {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Ratio::new::<ratio>(value))
    }
}

impl Deref for Nusselt {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Churchill–Bernstein correlation for a cylinder in cross-flow.
///
/// ```text
/// Nu = 0.3 + 0.62·Re^½·Pr^⅓ / [1 + (0.4/Pr)^⅔]^¼ · [1 + (Re/282000)^⅝]^⅘
/// ```
///
/// The Reynolds number is based on the cylinder diameter.
#[must_use]
pub fn churchill_bernstein(re: Reynolds, pr: Prandtl) -> Nusselt {
    let re = re.get::<ratio>();
    let pr = pr.get::<ratio>();

    let laminar = 0.62 * re.sqrt() * pr.powf(1.0 / 3.0)
        / (1.0 + (0.4 / pr).powf(2.0 / 3.0)).powf(1.0 / 4.0);
    let turbulent = (1.0 + (re / 282_000.0).powf(5.0 / 8.0)).powf(4.0 / 5.0);

    Nusselt::new(0.3 + laminar * turbulent)
}

/// Average Nusselt number for laminar flow along a flat plate.
///
/// ```text
/// Nu = 0.664·Re^½·Pr^⅓
/// ```
///
/// The Reynolds number is based on the plate length in the flow direction.
#[must_use]
pub fn laminar_flat_plate(re: Reynolds, pr: Prandtl) -> Nusselt {
    let re = re.get::<ratio>();
    let pr = pr.get::<ratio>();

    Nusselt::new(0.664 * re.powf(0.5) * pr.powf(1.0 / 3.0))
}

/// Converts a Nusselt number into a heat-transfer coefficient `h = Nu·k / L`.
#[must_use]
pub fn coefficient(nu: Nusselt, conductivity: ThermalConductivity, length: Length) -> HeatTransfer {
    *nu * conductivity / length
}

/// Convective heat rate `Q = h·A·ΔT`.
#[must_use]
pub fn heat_rate(h: HeatTransfer, area: Area, delta_t: TemperatureInterval) -> Power {
    h * area * delta_t
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, dynamic_viscosity::pascal_second,
        heat_transfer::watt_per_square_meter_kelvin, length::meter,
        mass_density::kilogram_per_cubic_meter, power::watt,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductivity::watt_per_meter_kelvin, velocity::meter_per_second,
    };

    #[test]
    fn martian_co2_prandtl_number() {
        let pr = Prandtl::from_properties(
            DynamicViscosity::new::<pascal_second>(1.422e-5),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(730.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0096),
        );
        assert_relative_eq!(pr.get::<ratio>(), 1.081_312_5, max_relative = 1e-12);
    }

    #[test]
    fn reynolds_number_over_diameter() {
        let re = Reynolds::from_flow(
            MassDensity::new::<kilogram_per_cubic_meter>(0.0139),
            Velocity::new::<meter_per_second>(40.0),
            Length::new::<meter>(0.1),
            DynamicViscosity::new::<pascal_second>(1.422e-5),
        );
        assert_relative_eq!(re.get::<ratio>(), 0.0139 * 40.0 * 0.1 / 1.422e-5, max_relative = 1e-12);
    }

    #[test]
    fn churchill_bernstein_still_air_limit() {
        let nu = churchill_bernstein(Reynolds::new(0.0), Prandtl::new(1.0));
        assert_relative_eq!(nu.get::<ratio>(), 0.3);
    }

    #[test]
    fn churchill_bernstein_air_at_moderate_reynolds() {
        let nu = churchill_bernstein(Reynolds::new(1.0e4), Prandtl::new(0.7));
        assert_relative_eq!(nu.get::<ratio>(), 53.327_788_670_209_97, max_relative = 1e-10);
    }

    #[test]
    fn churchill_bernstein_grows_with_reynolds() {
        let pr = Prandtl::new(1.08);
        let mut previous = churchill_bernstein(Reynolds::new(1.0), pr);
        for re in [10.0, 1e2, 1e3, 1e4, 1e5, 1e6] {
            let nu = churchill_bernstein(Reynolds::new(re), pr);
            assert!(nu > previous, "Nu should increase at Re = {re}");
            previous = nu;
        }
    }

    #[test]
    fn flat_plate_unit_prandtl() {
        let nu = laminar_flat_plate(Reynolds::new(1.0e4), Prandtl::new(1.0));
        assert_relative_eq!(nu.get::<ratio>(), 66.4, max_relative = 1e-12);
    }

    #[test]
    fn negative_reynolds_propagates_nan() {
        let nu = laminar_flat_plate(Reynolds::new(-1.0), Prandtl::new(1.0));
        assert!(nu.get::<ratio>().is_nan());
    }

    #[test]
    fn coefficient_and_heat_rate() {
        let h = coefficient(
            Nusselt::new(50.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.01),
            Length::new::<meter>(0.1),
        );
        assert_relative_eq!(h.get::<watt_per_square_meter_kelvin>(), 5.0, max_relative = 1e-12);

        let q = heat_rate(
            h,
            Area::new::<square_meter>(0.2),
            TemperatureInterval::new::<delta_kelvin>(100.0),
        );
        assert_relative_eq!(q.get::<watt>(), 100.0, max_relative = 1e-12);
    }
}
