use std::fmt::Debug;

use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::branching::SelectionContext;

/// Makes the branching decisions of the backtracking search.
pub trait Brancher: Debug {
    /// Returns the variable to branch on next, or [`None`] if every variable is assigned.
    fn next_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId>;

    /// Returns the colours of the domain of `variable` in the order in which they should be
    /// tried.
    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId)
        -> Vec<Colour>;
}
