use std::fmt::Debug;

use crate::basic_types::VariableId;
use crate::branching::SelectionContext;

/// Determines which unassigned variable is branched on next.
pub trait VariableSelector: Debug {
    /// Returns [`None`] only when every variable is assigned.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId>;
}

impl<T: VariableSelector + ?Sized> VariableSelector for Box<T> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        self.as_mut().select_variable(context)
    }
}
