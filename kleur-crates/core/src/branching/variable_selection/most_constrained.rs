use std::cmp::Reverse;

use crate::basic_types::VariableId;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;

/// A [`VariableSelector`] which selects the unassigned variable with the fewest remaining colours.
///
/// Ties are broken in favour of the variable with the most unassigned neighbours, and remaining
/// ties in favour of the lowest id.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostConstrained;

impl VariableSelector for MostConstrained {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        // min_by_key keeps the first minimum, and the variables are visited by increasing id.
        context.unassigned_variables().min_by_key(|&variable| {
            (
                context.domain_size(variable),
                Reverse(context.num_unassigned_neighbours(variable)),
            )
        })
    }
}
