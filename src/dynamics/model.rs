use log::debug;
use nalgebra::Vector3;
use std::path::Path;
use std::sync::Arc;

use crate::config::{AeroParameterSet, ConfigError, EnvironmentConfig};
use crate::dynamics::error::DynamicsError;
use crate::dynamics::state::{VehicleState, WrenchOutput};
use crate::dynamics::traits::DynamicsModel;
use crate::dynamics::wrench::compute_total_rotor_wrench;

/// Parametric rotor dynamics model for one simulated vehicle.
///
/// Owns the cached state and output; the parameter set is shared read-only,
/// so several models (one per vehicle) can reference the same coefficients
/// without duplicating them. All computation happens synchronously inside
/// `set_state`; the accessors only return the cached snapshot.
#[derive(Debug, Clone)]
pub struct ParametricDynamicsModel {
    aero_params: Arc<AeroParameterSet>,
    environment: EnvironmentConfig,
    state: VehicleState,
    output: WrenchOutput,
}

impl ParametricDynamicsModel {
    /// Creates a model over an already-loaded, shared parameter set.
    pub fn new(aero_params: Arc<AeroParameterSet>, environment: EnvironmentConfig) -> Self {
        Self {
            aero_params,
            environment,
            state: VehicleState::default(),
            output: WrenchOutput::default(),
        }
    }

    /// Creates a model by loading the parameter set from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the aero parameter YAML.
    /// * `environment` - Ambient environment for this simulation.
    ///
    /// # Returns
    /// A `Result` containing the model, or a `ConfigError` if the file fails
    /// to load.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        environment: EnvironmentConfig,
    ) -> Result<Self, ConfigError> {
        let aero_params = Arc::new(AeroParameterSet::from_file(path)?);
        Ok(Self::new(aero_params, environment))
    }

    /// Replaces the parameter-set reference with one loaded from `path`.
    pub fn load_aero_params<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        self.aero_params = Arc::new(AeroParameterSet::from_file(path)?);
        debug!(
            "Model now references parameter set '{}'",
            self.aero_params.name()
        );
        Ok(())
    }

    /// Recomputes the net wrench for the supplied state and caches it.
    ///
    /// # Arguments
    /// * `airspeed` - Relative airspeed in the body frame (m/s).
    /// * `angular_velocity` - Body-frame angular velocity (rad/s).
    /// * `actuator_inputs` - One throttle fraction in [0, 1] per rotor.
    ///
    /// # Returns
    /// `Err(DynamicsError::DimensionMismatch)` when the input length differs
    /// from the configured rotor count; the cached output is unchanged in
    /// that case.
    pub fn set_state(
        &mut self,
        airspeed: Vector3<f64>,
        angular_velocity: Vector3<f64>,
        actuator_inputs: &[f64],
    ) -> Result<(), DynamicsError> {
        let expected = self.aero_params.rotor_count();
        if actuator_inputs.len() != expected {
            return Err(DynamicsError::DimensionMismatch {
                expected,
                actual: actuator_inputs.len(),
            });
        }

        let (force, moment) = compute_total_rotor_wrench(
            &airspeed,
            &angular_velocity,
            actuator_inputs,
            &self.aero_params,
            &self.environment,
        );

        self.state = VehicleState {
            airspeed,
            angular_velocity,
            actuator_inputs: actuator_inputs.to_vec(),
        };
        self.output = WrenchOutput { force, moment };
        Ok(())
    }

    /// Net force from the most recent accepted step (N, body frame).
    pub fn force(&self) -> Vector3<f64> {
        self.output.force
    }

    /// Net moment from the most recent accepted step (N·m, body frame).
    pub fn moment(&self) -> Vector3<f64> {
        self.output.moment
    }

    /// The shared parameter set this model computes against.
    pub fn aero_params(&self) -> Arc<AeroParameterSet> {
        Arc::clone(&self.aero_params)
    }

    pub fn environment(&self) -> &EnvironmentConfig {
        &self.environment
    }

    /// The last state accepted by `set_state`.
    pub fn state(&self) -> &VehicleState {
        &self.state
    }
}

impl DynamicsModel for ParametricDynamicsModel {
    fn load_parameters<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        self.load_aero_params(path)
    }

    fn set_state(
        &mut self,
        airspeed: Vector3<f64>,
        angular_velocity: Vector3<f64>,
        actuator_inputs: &[f64],
    ) -> Result<(), DynamicsError> {
        ParametricDynamicsModel::set_state(self, airspeed, angular_velocity, actuator_inputs)
    }

    fn force(&self) -> Vector3<f64> {
        ParametricDynamicsModel::force(self)
    }

    fn moment(&self) -> Vector3<f64> {
        ParametricDynamicsModel::moment(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad_model() -> ParametricDynamicsModel {
        ParametricDynamicsModel::new(
            Arc::new(AeroParameterSet::quad_plane()),
            EnvironmentConfig::default(),
        )
    }

    #[test]
    fn test_output_zero_before_first_step() {
        let model = quad_model();
        assert_relative_eq!(model.force().norm(), 0.0);
        assert_relative_eq!(model.moment().norm(), 0.0);
    }

    #[test]
    fn test_set_state_caches_result() {
        let mut model = quad_model();
        model
            .set_state(Vector3::zeros(), Vector3::zeros(), &[0.5; 4])
            .unwrap();

        assert!(model.force().norm() > 0.0);
        assert_eq!(model.state().actuator_inputs, vec![0.5; 4]);
    }

    #[test]
    fn test_dimension_mismatch_preserves_cache() {
        let mut model = quad_model();
        model
            .set_state(Vector3::zeros(), Vector3::zeros(), &[0.5; 4])
            .unwrap();
        let cached_force = model.force();
        let cached_moment = model.moment();

        let err = model
            .set_state(Vector3::zeros(), Vector3::zeros(), &[0.5; 3])
            .unwrap_err();

        match err {
            DynamicsError::DimensionMismatch { expected, actual } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
        }
        assert_eq!(model.force(), cached_force);
        assert_eq!(model.moment(), cached_moment);
    }

    #[test]
    fn test_determinism_across_steps() {
        let mut model = quad_model();
        let airspeed = Vector3::new(14.0, 0.5, -1.0);
        let omega = Vector3::new(0.1, -0.05, 0.2);
        let inputs = [0.2, 0.4, 0.6, 0.8];

        model.set_state(airspeed, omega, &inputs).unwrap();
        let first = (model.force(), model.moment());

        // Perturb with a different state, then repeat the original one.
        model
            .set_state(Vector3::zeros(), Vector3::zeros(), &[1.0; 4])
            .unwrap();
        model.set_state(airspeed, omega, &inputs).unwrap();

        assert_eq!((model.force(), model.moment()), first);
    }

    #[test]
    fn test_shared_parameter_set() {
        let params = Arc::new(AeroParameterSet::quad_plane());
        let mut first = ParametricDynamicsModel::new(Arc::clone(&params), Default::default());
        let mut second = ParametricDynamicsModel::new(Arc::clone(&params), Default::default());

        first
            .set_state(Vector3::zeros(), Vector3::zeros(), &[0.3; 4])
            .unwrap();
        second
            .set_state(Vector3::zeros(), Vector3::zeros(), &[0.9; 4])
            .unwrap();

        // Same frozen coefficients, independent cached outputs.
        assert!(Arc::ptr_eq(&first.aero_params(), &second.aero_params()));
        assert!(second.force().norm() > first.force().norm());
    }
}
