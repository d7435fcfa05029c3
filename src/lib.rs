pub mod config;
pub mod dynamics;
pub mod utils;

pub use config::{
    AeroParameterSet, ConfigError, EnvironmentConfig, FuselageParameters, RotorParameters,
    SpinDirection,
};
pub use dynamics::{DynamicsError, DynamicsModel, ParametricDynamicsModel, WrenchOutput};
