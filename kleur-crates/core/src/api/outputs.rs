use crate::basic_types::Solution;

/// The result of [`Solver::satisfy`](crate::Solver::satisfy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A colouring was found.
    Satisfiable(Solution),
    /// Backtracking search explored the whole search tree: the instance has no colouring with the
    /// given number of colours.
    Unsatisfiable,
    /// The run ended before an answer was found, because the step budget of local search was
    /// spent or the termination condition triggered.
    Unknown,
}
