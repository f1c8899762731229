//! # Mars Motor Cooling
//!
//! Heat-dissipation budget for an electric rotor motor flying in the Martian
//! atmosphere, built as a [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! The budget compares the heat convection must remove to keep the motor at
//! its temperature limit with what two candidate airflows can achieve:
//! cross-flow over the motor cylinder and rotor downwash along it.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models (constraints, units,
//!   geometry, convection and radiation correlations).
//! - [`config`]: TOML case files for overriding the reference inputs.
//!
//! Only utilities in [`support`] are meant for reuse; model-internal helpers
//! stay private.

pub mod config;
pub mod models;
pub mod support;
