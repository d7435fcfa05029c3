use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynamicsError {
    #[error("Actuator input length {actual} does not match configured rotor count {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
