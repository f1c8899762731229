//! Console report.

use std::fmt;

use uom::si::power::watt;

use super::CoolingBudget;

/// Formats the three headline heat rates of a [`CoolingBudget`].
///
/// Labels are right-aligned on the colon and values use two decimals.
/// A blank line follows the last rate.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a CoolingBudget);

const LABEL_WIDTH: usize = 32;

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let budget = self.0;

        let lines = [
            ("Required Q_dot by convection", budget.required.q_dot),
            ("Possible Q_dot (across cylinder)", budget.across.q_dot),
            ("Possible Q_dot (down cylinder)", budget.down.q_dot),
        ];

        for (label, q_dot) in lines {
            writeln!(f, "{label:>LABEL_WIDTH$}: {:.2} W", q_dot.get::<watt>())?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::motor_cooling::core::{Inputs, evaluate};

    #[test]
    fn reference_report() {
        let budget = evaluate(&Inputs::mars_reference());

        assert_eq!(
            Report(&budget).to_string(),
            "    Required Q_dot by convection: 935.08 W\n\
             Possible Q_dot (across cylinder): 28.75 W\n  \
             Possible Q_dot (down cylinder): 22.72 W\n\n"
        );
    }

    #[test]
    fn non_finite_values_are_printed_not_hidden() {
        let mut budget = evaluate(&Inputs::mars_reference());
        budget.down.q_dot = budget.down.q_dot * f64::NAN;

        let report = Report(&budget).to_string();
        assert!(report.contains("Possible Q_dot (down cylinder): NaN W"));
    }
}
