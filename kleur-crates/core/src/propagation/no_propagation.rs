use crate::basic_types::Colour;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;
use crate::propagation::ConsistencyFilter;
use crate::propagation::PropagationContext;

/// A [`ConsistencyFilter`] which never removes anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPropagation;

impl ConsistencyFilter for NoPropagation {
    fn name(&self) -> &str {
        "NoPropagation"
    }

    fn propagate(
        &mut self,
        _context: &mut PropagationContext,
        _variable: VariableId,
        _value: Colour,
    ) -> PropagationStatus {
        Ok(())
    }
}
