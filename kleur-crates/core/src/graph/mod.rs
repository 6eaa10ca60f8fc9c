//! The static adjacency relation between the variables of an instance.

mod constraint_graph;

pub use constraint_graph::ConstraintGraph;
pub use constraint_graph::GraphError;
