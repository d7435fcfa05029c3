use nalgebra::Vector3;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{FuselageParameters, RotorParameters, SpinDirection};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read aero config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid aero configuration: {0}")]
    ValidationError(String),
}

/// Flat deserialization target for the aero parameter YAML.
///
/// Coefficients are kept optional here so an absent field surfaces as a
/// `MissingField` error naming the offending rotor, rather than a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RawAeroConfig {
    pub name: String,
    pub rotors: Vec<RawRotorConfig>,
    #[serde(default)]
    pub fuselage: Option<RawFuselageConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RawRotorConfig {
    pub name: Option<String>,
    pub position: Option<[f64; 3]>,
    pub axis: Option<[f64; 3]>,
    pub spin: Option<SpinDirection>,
    pub diameter: Option<f64>,
    pub max_rotor_speed: Option<f64>,
    pub thrust_coefficient: Option<f64>,
    pub advance_ratio_gain: Option<f64>,
    pub torque_coefficient: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFuselageConfig {
    pub force_bias: Option<[f64; 3]>,
    pub moment_bias: Option<[f64; 3]>,
    pub drag_coefficient: Option<f64>,
    pub reference_area: Option<f64>,
}

fn require<T>(field: Option<T>, rotor: usize, name: &str) -> Result<T, ConfigError> {
    field.ok_or_else(|| ConfigError::MissingField(format!("rotors[{}].{}", rotor, name)))
}

impl RotorParameters {
    /// Converts one raw rotor entry into validated rotor parameters.
    ///
    /// # Arguments
    /// * `index` - Position of the rotor in the actuator ordering, used for
    ///             error reporting and the default channel name.
    /// * `raw` - The deserialized YAML entry.
    ///
    /// # Returns
    /// A `Result` containing the validated parameters, with the thrust axis
    /// normalized to unit length.
    pub fn from_raw(index: usize, raw: &RawRotorConfig) -> Result<Self, ConfigError> {
        let position = require(raw.position, index, "position")?;
        let axis = require(raw.axis, index, "axis")?;
        let spin = require(raw.spin, index, "spin")?;
        let diameter = require(raw.diameter, index, "diameter")?;
        let max_rotor_speed = require(raw.max_rotor_speed, index, "max_rotor_speed")?;
        let thrust_coefficient = require(raw.thrust_coefficient, index, "thrust_coefficient")?;
        let torque_coefficient = require(raw.torque_coefficient, index, "torque_coefficient")?;

        if diameter <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "rotors[{}].diameter must be positive, got {}",
                index, diameter
            )));
        }
        if max_rotor_speed <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "rotors[{}].max_rotor_speed must be positive, got {}",
                index, max_rotor_speed
            )));
        }
        if thrust_coefficient < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "rotors[{}].thrust_coefficient must be non-negative, got {}",
                index, thrust_coefficient
            )));
        }

        let axis = Vector3::from(axis);
        let axis_norm = axis.norm();
        if axis_norm < 1e-9 {
            return Err(ConfigError::ValidationError(format!(
                "rotors[{}].axis must be non-zero",
                index
            )));
        }

        Ok(Self {
            name: raw
                .name
                .clone()
                .unwrap_or_else(|| format!("rotor{}", index)),
            position: Vector3::from(position),
            axis: axis / axis_norm,
            spin,
            diameter,
            max_rotor_speed,
            thrust_coefficient,
            advance_ratio_gain: raw.advance_ratio_gain.unwrap_or(0.0),
            torque_coefficient,
        })
    }
}

impl FuselageParameters {
    /// Converts the optional fuselage section; absent fields default to zero.
    pub fn from_raw(raw: &RawFuselageConfig) -> Self {
        Self {
            force_bias: raw.force_bias.map(Vector3::from).unwrap_or_else(Vector3::zeros),
            moment_bias: raw.moment_bias.map(Vector3::from).unwrap_or_else(Vector3::zeros),
            drag_coefficient: raw.drag_coefficient.unwrap_or(0.0),
            reference_area: raw.reference_area.unwrap_or(0.0),
        }
    }
}
