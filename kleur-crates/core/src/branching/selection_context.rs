use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::engine::SearchState;
use crate::graph::ConstraintGraph;
use crate::propagation::PropagationContext;

/// The view on the search state which is given to the selectors.
#[derive(Debug)]
pub struct SelectionContext<'state, 'graph> {
    state: &'state mut SearchState<'graph>,
}

impl<'state, 'graph> SelectionContext<'state, 'graph> {
    pub fn new(state: &'state mut SearchState<'graph>) -> SelectionContext<'state, 'graph> {
        SelectionContext { state }
    }

    pub fn graph(&self) -> &'graph ConstraintGraph {
        self.state.graph
    }

    pub fn domain(&self, variable: VariableId) -> &[Colour] {
        self.state.domains.get(variable)
    }

    pub fn domain_size(&self, variable: VariableId) -> usize {
        self.state.domains.size(variable)
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.state.assignment.is_assigned(variable)
    }

    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.state.assignment.unassigned()
    }

    /// The number of neighbours of `variable` which are not assigned.
    pub fn num_unassigned_neighbours(&self, variable: VariableId) -> usize {
        self.graph()
            .neighbours(variable)
            .iter()
            .filter(|&&neighbour| !self.is_assigned(neighbour))
            .count()
    }

    /// Tentatively assigns `colour` to `variable` and runs `probe` on the resulting state.
    ///
    /// The domains and the assignment are restored before returning, regardless of what `probe`
    /// changed.
    pub fn probe_assignment<R>(
        &mut self,
        variable: VariableId,
        colour: Colour,
        probe: impl FnOnce(&mut PropagationContext) -> R,
    ) -> R {
        let previous = self.state.assignment.value(variable);
        let checkpoint = self.state.domains.snapshot();
        self.state.assignment.assign(variable, colour);

        let result = {
            let mut context = PropagationContext::new(
                self.state.graph,
                &mut self.state.domains,
                &self.state.assignment,
            );
            probe(&mut context)
        };

        match previous {
            Some(previous) => self.state.assignment.assign(variable, previous),
            None => self.state.assignment.unassign(variable),
        }
        self.state.domains.restore(checkpoint);

        result
    }
}
