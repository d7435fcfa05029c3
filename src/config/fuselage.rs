use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::EnvironmentConfig;

/// Aircraft-level aerodynamic terms not attributable to any rotor.
///
/// The bias vectors are applied once per step regardless of airspeed; the
/// residual drag term scales with the square of the airspeed magnitude and
/// vanishes at rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuselageParameters {
    /// Residual force bias in the body frame (N)
    pub force_bias: Vector3<f64>,
    /// Residual moment bias in the body frame (N·m)
    pub moment_bias: Vector3<f64>,
    /// Airframe drag coefficient
    pub drag_coefficient: f64,
    /// Drag reference area (m²)
    pub reference_area: f64,
}

impl Default for FuselageParameters {
    fn default() -> Self {
        Self {
            force_bias: Vector3::zeros(),
            moment_bias: Vector3::zeros(),
            drag_coefficient: 0.0,
            reference_area: 0.0,
        }
    }
}

impl FuselageParameters {
    /// Residual airframe drag, opposing the relative airspeed.
    pub fn drag_force(
        &self,
        airspeed: &Vector3<f64>,
        environment: &EnvironmentConfig,
    ) -> Vector3<f64> {
        -0.5 * environment.air_density
            * self.drag_coefficient
            * self.reference_area
            * airspeed.norm()
            * airspeed
    }
}
