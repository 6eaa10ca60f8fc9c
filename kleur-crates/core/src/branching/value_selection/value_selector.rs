use std::fmt::Debug;

use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::branching::SelectionContext;

/// Orders the candidate colours of the variable which is branched on.
pub trait ValueSelector: Debug {
    /// Returns every colour in the domain of `variable` exactly once.
    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId)
        -> Vec<Colour>;
}

impl<T: ValueSelector + ?Sized> ValueSelector for Box<T> {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: VariableId,
    ) -> Vec<Colour> {
        self.as_mut().order_values(context, variable)
    }
}
