use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;

/// A [`ValueSelector`] which tries the colours in the order in which they appear in the domain.
#[derive(Clone, Copy, Debug, Default)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: VariableId,
    ) -> Vec<Colour> {
        context.domain(variable).to_vec()
    }
}
