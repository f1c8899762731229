//! Thermal radiation.

use uom::si::{
    area::square_meter,
    f64::{Area, Power, Ratio, ThermodynamicTemperature},
    power::watt,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

/// Stefan–Boltzmann constant, W/(m²·K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Net power radiated by a grey surface at `surface` to surroundings at `surroundings`.
///
/// Computes `ε·σ·A·(T_s⁴ − T_∞⁴)` on absolute temperatures.
/// The result is negative when the surroundings are hotter.
#[must_use]
pub fn net_radiated_power(
    emissivity: Ratio,
    area: Area,
    surface: ThermodynamicTemperature,
    surroundings: ThermodynamicTemperature,
) -> Power {
    let t_s = surface.get::<kelvin>();
    let t_inf = surroundings.get::<kelvin>();

    Power::new::<watt>(
        emissivity.get::<ratio>()
            * STEFAN_BOLTZMANN
            * area.get::<square_meter>()
            * (t_s.powi(4) - t_inf.powi(4)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn black_body_square_meter() {
        let q = net_radiated_power(
            Ratio::new::<ratio>(1.0),
            Area::new::<square_meter>(1.0),
            ThermodynamicTemperature::new::<kelvin>(100.0),
            ThermodynamicTemperature::new::<kelvin>(0.0),
        );
        assert_relative_eq!(q.get::<watt>(), 5.67, max_relative = 1e-12);
    }

    #[test]
    fn hotter_surroundings_give_negative_power() {
        let q = net_radiated_power(
            Ratio::new::<ratio>(0.98),
            Area::new::<square_meter>(0.1),
            ThermodynamicTemperature::new::<kelvin>(223.15),
            ThermodynamicTemperature::new::<kelvin>(323.15),
        );
        assert!(q.get::<watt>() < 0.0);
    }

    #[test]
    fn isothermal_surface_radiates_nothing() {
        let t = ThermodynamicTemperature::new::<kelvin>(250.0);
        let q = net_radiated_power(Ratio::new::<ratio>(0.5), Area::new::<square_meter>(2.0), t, t);
        assert_eq!(q.get::<watt>(), 0.0);
    }
}
