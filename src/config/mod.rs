mod environment;
mod fuselage;
mod loader;
mod rotor;

pub use environment::EnvironmentConfig;
pub use fuselage::FuselageParameters;
pub use loader::{ConfigError, RawAeroConfig, RawFuselageConfig, RawRotorConfig};
pub use rotor::{RotorParameters, SpinDirection};

use log::info;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The aerodynamic parameter set for a rotor-actuated airframe.
///
/// Loaded once from YAML (or built from a preset) and frozen: the rotor count
/// is fixed for the lifetime of the set and must match the actuator-input
/// vector length on every step. Share one set across several dynamics model
/// instances behind an `Arc` rather than deep-copying it per vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AeroParameterSet {
    name: String,
    rotors: Vec<RotorParameters>,
    fuselage: FuselageParameters,
}

impl AeroParameterSet {
    /// Creates a parameter set from already-validated parts.
    ///
    /// # Arguments
    /// * `name` - Airframe identifier.
    /// * `rotors` - Rotor parameters, ordered by actuator channel.
    /// * `fuselage` - Aircraft-level bias terms.
    ///
    /// # Returns
    /// A `Result` rejecting an empty rotor list.
    pub fn new(
        name: impl Into<String>,
        rotors: Vec<RotorParameters>,
        fuselage: FuselageParameters,
    ) -> Result<Self, ConfigError> {
        if rotors.is_empty() {
            return Err(ConfigError::ValidationError(
                "parameter set must configure at least one rotor".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            rotors,
            fuselage,
        })
    }

    /// Loads and validates a parameter set from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file.
    ///
    /// # Returns
    /// A `Result` containing the frozen parameter set, or a `ConfigError` on
    /// unreadable, malformed, or incomplete input.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        let raw: RawAeroConfig = serde_yaml::from_str(&file_contents)?;
        let set = Self::from_raw(raw)?;
        info!(
            "Loaded aero parameter set '{}' with {} rotors",
            set.name,
            set.rotor_count()
        );
        Ok(set)
    }

    /// Converts a raw configuration into a validated parameter set.
    pub fn from_raw(raw: RawAeroConfig) -> Result<Self, ConfigError> {
        let rotors = raw
            .rotors
            .iter()
            .enumerate()
            .map(|(index, rotor)| RotorParameters::from_raw(index, rotor))
            .collect::<Result<Vec<_>, _>>()?;
        let fuselage = raw
            .fuselage
            .as_ref()
            .map(FuselageParameters::from_raw)
            .unwrap_or_default();
        Self::new(raw.name, rotors, fuselage)
    }

    /// Writes the parameter set back out as YAML.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of configured rotors, equal to the expected actuator count.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    pub fn rotors(&self) -> &[RotorParameters] {
        &self.rotors
    }

    pub fn fuselage(&self) -> &FuselageParameters {
        &self.fuselage
    }

    /// Creates a symmetric four-rotor arrangement from a template rotor.
    ///
    /// Rotors sit at the corners of a rectangle centred on the body reference
    /// point, with spin directions alternated along each diagonal so reaction
    /// torques cancel at equal throttle.
    pub fn symmetric_quad(template: RotorParameters, x_offset: f64, y_offset: f64) -> Self {
        let placements = [
            ("front_right", x_offset, y_offset, SpinDirection::Ccw),
            ("front_left", x_offset, -y_offset, SpinDirection::Cw),
            ("rear_left", -x_offset, -y_offset, SpinDirection::Ccw),
            ("rear_right", -x_offset, y_offset, SpinDirection::Cw),
        ];
        let rotors = placements
            .iter()
            .map(|&(name, x, y, spin)| RotorParameters {
                name: name.to_string(),
                position: Vector3::new(x, y, 0.0),
                spin,
                ..template.clone()
            })
            .collect();
        Self {
            name: "SymmetricQuad".to_string(),
            rotors,
            fuselage: FuselageParameters::default(),
        }
    }

    /// Four-rotor lifting arrangement used by a typical quad-plane airframe.
    pub fn quad_plane() -> Self {
        let mut set = Self::symmetric_quad(RotorParameters::default(), 0.35, 0.35);
        set.name = "QuadPlane".to_string();
        set.fuselage = FuselageParameters {
            drag_coefficient: 0.9,
            reference_area: 0.45,
            ..Default::default()
        };
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rotor_list_rejected() {
        let err =
            AeroParameterSet::new("empty", Vec::new(), FuselageParameters::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_symmetric_quad_torque_cancels() {
        let set = AeroParameterSet::symmetric_quad(RotorParameters::default(), 0.3, 0.3);
        assert_eq!(set.rotor_count(), 4);

        let torque_sum: f64 = set.rotors().iter().map(|r| r.spin.torque_sign()).sum();
        approx::assert_relative_eq!(torque_sum, 0.0);

        let position_sum: Vector3<f64> = set.rotors().iter().map(|r| r.position).sum();
        approx::assert_relative_eq!(position_sum.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quad_plane_preset_is_valid() {
        let set = AeroParameterSet::quad_plane();
        assert_eq!(set.name(), "QuadPlane");
        assert_eq!(set.rotor_count(), 4);
        for rotor in set.rotors() {
            assert!(rotor.diameter > 0.0);
            assert!(rotor.max_rotor_speed > 0.0);
            approx::assert_relative_eq!(rotor.axis.norm(), 1.0, epsilon = 1e-12);
        }
    }
}
