mod error;
mod model;
mod rotor;
mod state;
mod traits;
mod wrench;

pub use error::DynamicsError;
pub use model::ParametricDynamicsModel;
pub use rotor::{compute_rotor_force, compute_rotor_moment};
pub use state::{VehicleState, WrenchOutput};
pub use traits::DynamicsModel;
pub use wrench::compute_total_rotor_wrench;
