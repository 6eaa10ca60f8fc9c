mod colour;
mod propagation_status;
mod random;
mod solution;
mod solver_error;
mod trail;
mod variable_id;

pub use colour::Colour;
pub use propagation_status::EmptyDomain;
pub use propagation_status::PropagationStatus;
pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests;
pub use solution::Solution;
pub use solver_error::SolverError;
pub(crate) use trail::Trail;
pub use variable_id::VariableId;
