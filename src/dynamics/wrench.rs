use nalgebra::Vector3;

use crate::config::{AeroParameterSet, EnvironmentConfig};
use crate::dynamics::rotor::{compute_rotor_force, compute_rotor_moment};

/// Sums per-rotor wrenches and the airframe bias terms into the net
/// body-frame force and moment.
///
/// Callers must have verified that `actuator_inputs` matches the configured
/// rotor count. Pure: identical inputs and parameters always produce
/// identical outputs.
pub fn compute_total_rotor_wrench(
    airspeed: &Vector3<f64>,
    angular_velocity: &Vector3<f64>,
    actuator_inputs: &[f64],
    params: &AeroParameterSet,
    environment: &EnvironmentConfig,
) -> (Vector3<f64>, Vector3<f64>) {
    debug_assert_eq!(actuator_inputs.len(), params.rotor_count());

    let mut total_force = Vector3::zeros();
    let mut total_moment = Vector3::zeros();

    for (rotor, &input) in params.rotors().iter().zip(actuator_inputs) {
        // A rotor displaced from the body origin sees the rotational velocity
        // contribution on top of the vehicle airspeed.
        let local_airspeed = airspeed + angular_velocity.cross(&rotor.position);

        let force = compute_rotor_force(&local_airspeed, input, rotor, environment);
        let moment = compute_rotor_moment(&local_airspeed, input, rotor, &force, environment);

        total_force += force;
        total_moment += moment;
    }

    // Aircraft-level bias terms are added once, not per rotor.
    let fuselage = params.fuselage();
    total_force += fuselage.force_bias + fuselage.drag_force(airspeed, environment);
    total_moment += fuselage.moment_bias;

    (total_force, total_moment)
}
