use approx::assert_relative_eq;
use twine_core::Model;
use uom::si::{
    f64::ThermodynamicTemperature, heat_transfer::watt_per_square_meter_kelvin, power::watt,
    thermodynamic_temperature::degree_celsius,
};

use mars_motor_cooling::{
    config::CaseConfig,
    models::thermal::motor_cooling::{FlowRegime, Inputs, MotorCooling, Report},
};

#[test]
fn reference_case_report() {
    let budget = MotorCooling.call(&Inputs::mars_reference()).unwrap();

    assert_eq!(
        Report(&budget).to_string(),
        concat!(
            "    Required Q_dot by convection: 935.08 W\n",
            "Possible Q_dot (across cylinder): 28.75 W\n",
            "  Possible Q_dot (down cylinder): 22.72 W\n",
            "\n",
        )
    );
}

#[test]
fn case_file_matches_reference_inputs() {
    let inputs = CaseConfig::from_toml_str("").unwrap().to_inputs().unwrap();

    let from_file = MotorCooling.call(&inputs).unwrap();
    let reference = MotorCooling.call(&Inputs::mars_reference()).unwrap();

    for regime in FlowRegime::ALL {
        assert_relative_eq!(
            from_file.achievable(regime).q_dot.get::<watt>(),
            reference.achievable(regime).q_dot.get::<watt>(),
            max_relative = 1e-12
        );
    }
    assert_relative_eq!(
        from_file.required.q_dot.get::<watt>(),
        reference.required.q_dot.get::<watt>(),
        max_relative = 1e-12
    );
}

#[test]
fn hotter_limit_lowers_required_coefficient() {
    let reference = MotorCooling.call(&Inputs::mars_reference()).unwrap();
    let hotter = MotorCooling
        .call(
            &Inputs::mars_reference()
                .with_motor_temperature(ThermodynamicTemperature::new::<degree_celsius>(120.0)),
        )
        .unwrap();

    assert!(
        hotter.required.h.get::<watt_per_square_meter_kelvin>()
            < reference.required.h.get::<watt_per_square_meter_kelvin>()
    );
    assert!(hotter.across.q_dot > reference.across.q_dot);
}
