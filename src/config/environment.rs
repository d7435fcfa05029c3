use serde::{Deserialize, Serialize};

use crate::utils::constants::{AIR_DENSITY, GRAVITY, MIN_AIRSPEED_THRESH};

/// Ambient environment the wrench computation runs in.
///
/// Defaults carry the base-design constants; real deployments override air
/// density per altitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Ambient air density (kg/m³)
    pub air_density: f64,
    /// Gravitational acceleration (m/s²), exposed for host integrators
    pub gravity: f64,
    /// Airspeed magnitude below which advance-ratio terms are regularized (m/s)
    pub min_airspeed_threshold: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY,
            gravity: GRAVITY,
            min_airspeed_threshold: MIN_AIRSPEED_THRESH,
        }
    }
}
