use nalgebra::Vector3;

use crate::config::{EnvironmentConfig, RotorParameters};

/// Computes the thrust force of a single rotor in the body frame.
///
/// The thrust law is quadratic in the effective rotor speed
/// `n = actuator_input * max_rotor_speed`, scaled by air density and the
/// fourth power of the disc diameter, and modulated by an advance-ratio
/// efficiency factor:
///
/// `T = rho * c_T * n^2 * D^4 * eta(v)`
///
/// The result points along the configured thrust axis and is never negative
/// for an actuator input in [0, 1].
///
/// # Arguments
/// * `local_airspeed` - Airspeed seen at the rotor disc, including the
///                      rotational velocity contribution of the mounting
///                      offset (m/s, body frame).
/// * `actuator_input` - Normalized throttle command in [0, 1].
/// * `rotor` - Coefficients and geometry for this rotor.
/// * `environment` - Ambient density and regularization threshold.
pub fn compute_rotor_force(
    local_airspeed: &Vector3<f64>,
    actuator_input: f64,
    rotor: &RotorParameters,
    environment: &EnvironmentConfig,
) -> Vector3<f64> {
    debug_assert!(
        (0.0..=1.0).contains(&actuator_input),
        "actuator input {} outside [0, 1]",
        actuator_input
    );

    let rotor_speed = actuator_input * rotor.max_rotor_speed;
    let thrust = environment.air_density
        * rotor.thrust_coefficient
        * rotor_speed.powi(2)
        * rotor.diameter.powi(4)
        * advance_ratio_efficiency(local_airspeed, rotor, environment);

    rotor.axis * thrust
}

/// Computes the moment contribution of a single rotor in the body frame.
///
/// The lever-arm term crosses the mounting offset with the already-computed
/// rotor force; the reaction-torque term acts about the thrust axis with the
/// sign set by the spin direction:
///
/// `Q = sign(spin) * rho * c_Q * n^2 * D^5 * eta(v)`
pub fn compute_rotor_moment(
    local_airspeed: &Vector3<f64>,
    actuator_input: f64,
    rotor: &RotorParameters,
    rotor_force: &Vector3<f64>,
    environment: &EnvironmentConfig,
) -> Vector3<f64> {
    let lever_arm = rotor.position.cross(rotor_force);

    let rotor_speed = actuator_input * rotor.max_rotor_speed;
    let reaction_torque = rotor.spin.torque_sign()
        * environment.air_density
        * rotor.torque_coefficient
        * rotor_speed.powi(2)
        * rotor.diameter.powi(5)
        * advance_ratio_efficiency(local_airspeed, rotor, environment);

    lever_arm + rotor.axis * reaction_torque
}

/// Thrust efficiency for the current advance ratio.
///
/// `eta = max(0, 1 - k_J * J * mu)` with advance ratio
/// `J = |v| / (max_rotor_speed * D)` and axial inflow fraction
/// `mu = v_parallel / max(|v|, min_airspeed_threshold)`.
///
/// The inflow fraction divides by the airspeed magnitude; below the threshold
/// the magnitude is clamped, which keeps the factor finite through hover and
/// continuous at the boundary (at `|v| = threshold` both branches agree).
fn advance_ratio_efficiency(
    local_airspeed: &Vector3<f64>,
    rotor: &RotorParameters,
    environment: &EnvironmentConfig,
) -> f64 {
    let airspeed_mag = local_airspeed.norm();
    let v_parallel = local_airspeed.dot(&rotor.axis);

    let advance_ratio = airspeed_mag / (rotor.max_rotor_speed * rotor.diameter);
    let axial_inflow = v_parallel / airspeed_mag.max(environment.min_airspeed_threshold);

    (1.0 - rotor.advance_ratio_gain * advance_ratio * axial_inflow).max(0.0)
}
