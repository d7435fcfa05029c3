pub mod actuator;
pub mod constants;
