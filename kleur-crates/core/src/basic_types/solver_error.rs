use thiserror::Error;

use crate::basic_types::Colour;
use crate::basic_types::VariableId;

/// Faults which indicate a bug in the solver (or a corrupted input) rather than an instance without
/// a colouring. An unsolvable instance is reported through
/// [`SatisfactionResult::Unsatisfiable`](crate::results::SatisfactionResult::Unsatisfiable)
/// instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("the domain of {variable} is empty before the search started")]
    EmptyInitialDomain { variable: VariableId },

    #[error("adjacent variables {first} and {second} are both assigned colour {colour}")]
    ConflictingAssignment {
        first: VariableId,
        second: VariableId,
        colour: Colour,
    },

    #[error("{variable} is assigned colour {colour} which is not in its domain")]
    AssignmentOutsideDomain { variable: VariableId, colour: Colour },

    #[error("{variable} is unassigned in a reported solution")]
    IncompleteAssignment { variable: VariableId },
}
