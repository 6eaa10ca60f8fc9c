use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::branching::value_selection::InDomainOrder;
use crate::branching::value_selection::LeastConstrainingValue;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::MostConstrained;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;

/// A [`Brancher`] which selects the variable and orders its values independently of each other.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    pub(crate) variable_selector: VariableSelect,
    pub(crate) value_selector: ValueSelect,
}

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl IndependentVariableValueBrancher<Box<dyn VariableSelector>, Box<dyn ValueSelector>> {
    /// Creates the brancher matching the two ordering switches: [`MostConstrained`] instead of
    /// [`InputOrder`], and [`LeastConstrainingValue`] instead of [`InDomainOrder`].
    pub fn from_orderings(variable_ordering: bool, value_ordering: bool) -> Self {
        let variable_selector: Box<dyn VariableSelector> = if variable_ordering {
            Box::new(MostConstrained)
        } else {
            Box::new(InputOrder)
        };
        let value_selector: Box<dyn ValueSelector> = if value_ordering {
            Box::new(LeastConstrainingValue)
        } else {
            Box::new(InDomainOrder)
        };

        IndependentVariableValueBrancher::new(variable_selector, value_selector)
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    fn next_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        self.variable_selector.select_variable(context)
    }

    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: VariableId,
    ) -> Vec<Colour> {
        self.value_selector.order_values(context, variable)
    }
}
