use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the equilibrium temperature search.
#[derive(Debug, Clone, Copy)]
pub struct EquilibriumConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the motor temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the surplus heat rate.
    pub power_tol: Power,

    /// Width of the search above ambient.
    pub search_span: TemperatureInterval,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            power_tol: Power::new::<watt>(1e-9),
            search_span: TemperatureInterval::new::<delta_kelvin>(5000.0),
        }
    }
}

impl EquilibriumConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<watt>(),
        }
    }
}
