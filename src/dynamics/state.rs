use nalgebra::Vector3;

/// Instantaneous vehicle state supplied by the host integrator each step.
///
/// Transient: overwritten on every accepted `set_state` call, never persisted.
#[derive(Debug, Clone)]
pub struct VehicleState {
    /// Relative airspeed in the body frame (m/s)
    pub airspeed: Vector3<f64>,
    /// Angular velocity in the body frame (rad/s)
    pub angular_velocity: Vector3<f64>,
    /// Normalized throttle command per rotor, each in [0, 1]
    pub actuator_inputs: Vec<f64>,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            airspeed: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            actuator_inputs: Vec::new(),
        }
    }
}

/// Net aerodynamic wrench from the most recent accepted step.
///
/// A snapshot, not a history: zero until the first successful `set_state`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrenchOutput {
    /// Net force in the body frame (N)
    pub force: Vector3<f64>,
    /// Net moment in the body frame (N·m)
    pub moment: Vector3<f64>,
}

impl Default for WrenchOutput {
    fn default() -> Self {
        Self {
            force: Vector3::zeros(),
            moment: Vector3::zeros(),
        }
    }
}
