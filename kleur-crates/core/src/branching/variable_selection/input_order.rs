use crate::basic_types::VariableId;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;

/// A [`VariableSelector`] which selects the unassigned variable with the lowest id.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        context.unassigned_variables().next()
    }
}
