use nalgebra::Vector3;
use std::path::Path;

use crate::config::ConfigError;
use crate::dynamics::error::DynamicsError;

/// Capability set implemented by every vehicle dynamics variant.
///
/// Variants (multirotor, quad-plane, fixed-wing) are selected at model
/// construction; hosts that drive a single variant use the concrete type
/// directly.
pub trait DynamicsModel {
    /// Replaces the aerodynamic parameter set from a configuration file.
    ///
    /// Must succeed before the first `set_state` that references
    /// rotor-specific data.
    fn load_parameters<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError>;

    /// Recomputes the net aerodynamic wrench for the supplied state.
    ///
    /// On a dimension mismatch the previously cached output is left
    /// untouched.
    fn set_state(
        &mut self,
        airspeed: Vector3<f64>,
        angular_velocity: Vector3<f64>,
        actuator_inputs: &[f64],
    ) -> Result<(), DynamicsError>;

    /// Net force from the most recent accepted step (N, body frame).
    fn force(&self) -> Vector3<f64>;

    /// Net moment from the most recent accepted step (N·m, body frame).
    fn moment(&self) -> Vector3<f64>;
}
