use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Rotor spin direction, viewed along the thrust axis.
///
/// Determines the sign of the reaction torque transmitted to the airframe:
/// the airframe is torqued opposite to the rotor's rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinDirection {
    Cw,
    Ccw,
}

impl SpinDirection {
    /// Sign applied to the reaction torque about the thrust axis.
    pub fn torque_sign(&self) -> f64 {
        match self {
            SpinDirection::Cw => 1.0,
            SpinDirection::Ccw => -1.0,
        }
    }
}

/// Configuration for a single rotor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotorParameters {
    /// Name of the actuator channel driving this rotor
    pub name: String,
    /// Rotor hub position relative to the body reference point (m)
    pub position: Vector3<f64>,
    /// Thrust axis in the body frame, unit length
    pub axis: Vector3<f64>,
    /// Spin direction, sets the sign of the reaction torque
    pub spin: SpinDirection,
    /// Rotor disc diameter (m)
    pub diameter: f64,
    /// Rotor speed at full throttle (rev/s)
    pub max_rotor_speed: f64,
    /// Static thrust coefficient
    pub thrust_coefficient: f64,
    /// Thrust decay slope with respect to the axial advance ratio
    pub advance_ratio_gain: f64,
    /// Reaction torque coefficient
    pub torque_coefficient: f64,
}

impl Default for RotorParameters {
    fn default() -> Self {
        Self {
            name: "Generic Rotor".to_string(),
            position: Vector3::new(0.0, 0.0, 0.0),
            axis: Vector3::new(0.0, 0.0, -1.0), // Lifting, body z points down
            spin: SpinDirection::Ccw,
            diameter: 0.28,
            max_rotor_speed: 150.0,
            thrust_coefficient: 0.10,
            advance_ratio_gain: 1.5,
            torque_coefficient: 0.012,
        }
    }
}

impl RotorParameters {
    /// Creates a lifting rotor mounted at the given body-frame offset.
    ///
    /// # Arguments
    /// * `name` - Actuator channel label.
    /// * `position` - Hub offset from the body reference point (m).
    /// * `spin` - Spin direction of the rotor.
    ///
    /// # Returns
    /// A `RotorParameters` with the default lifting-rotor coefficients.
    pub fn lifting(name: impl Into<String>, position: Vector3<f64>, spin: SpinDirection) -> Self {
        Self {
            name: name.into(),
            position,
            spin,
            ..Default::default()
        }
    }

    /// Creates a forward-thrusting pusher rotor at the given offset.
    pub fn pusher(name: impl Into<String>, position: Vector3<f64>, spin: SpinDirection) -> Self {
        Self {
            name: name.into(),
            position,
            axis: Vector3::new(1.0, 0.0, 0.0),
            spin,
            diameter: 0.36,
            max_rotor_speed: 120.0,
            ..Default::default()
        }
    }
}
