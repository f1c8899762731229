//! Body geometry.

use std::f64::consts::PI;

use uom::si::f64::{Area, Length};

/// A solid right circular cylinder.
///
/// The motor is treated as one lumped cylinder with no fins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub radius: Length,
    pub height: Length,
}

impl Cylinder {
    #[must_use]
    pub fn new(radius: Length, height: Length) -> Self {
        Self { radius, height }
    }

    /// Returns the diameter `2r`.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.radius * 2.0
    }

    /// Returns the total exposed surface area `2πrl + 2πr²` (side wall plus both ends).
    #[must_use]
    pub fn surface_area(&self) -> Area {
        let r = self.radius;
        let l = self.height;

        r * l * (2.0 * PI) + r * r * (2.0 * PI)
    }
}
