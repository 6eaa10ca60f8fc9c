use log::trace;

use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::propagation::ConsistencyFilter;
use crate::propagation::ForwardChecking;

/// A [`ValueSelector`] which tries first the colour that rules out the fewest colours of the
/// unassigned neighbours.
///
/// The impact of a colour is measured by running [`ForwardChecking`] for it on a probe of the
/// current state. A colour which empties the domain of a neighbour is tried last. Colours with
/// the same impact keep their domain order.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeastConstrainingValue;

impl LeastConstrainingValue {
    fn impact(context: &mut SelectionContext, variable: VariableId, colour: Colour) -> usize {
        context.probe_assignment(variable, colour, |propagation_context| {
            match ForwardChecking.propagate(propagation_context, variable, colour) {
                Ok(()) => propagation_context.num_pruned(),
                Err(_) => usize::MAX,
            }
        })
    }
}

impl ValueSelector for LeastConstrainingValue {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: VariableId,
    ) -> Vec<Colour> {
        let domain = context.domain(variable).to_vec();
        let mut candidates = domain
            .into_iter()
            .map(|colour| (Self::impact(context, variable, colour), colour))
            .collect::<Vec<_>>();

        candidates.sort_by_key(|&(impact, _)| impact);
        trace!("value impacts for {variable}: {candidates:?}");

        candidates.into_iter().map(|(_, colour)| colour).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DomainStore;
    use crate::engine::SearchState;
    use crate::graph::ConstraintGraph;

    fn x(id: u32) -> VariableId {
        VariableId::new(id)
    }

    fn c(id: u32) -> Colour {
        Colour::new(id)
    }

    #[test]
    fn colours_which_prune_less_come_first() {
        // Colour 1 is already gone from both neighbours of 0, so it prunes nothing.
        let graph = ConstraintGraph::new(3, [(0, 1), (0, 2)]).expect("valid graph");
        let domains = DomainStore::from_domains(vec![
            vec![c(0), c(1), c(2)],
            vec![c(0), c(2)],
            vec![c(0), c(2)],
        ]);
        let mut state = SearchState::new(&graph, domains);

        let order =
            LeastConstrainingValue.order_values(&mut SelectionContext::new(&mut state), x(0));

        assert_eq!(vec![c(1), c(0), c(2)], order);
    }

    #[test]
    fn wipe_outs_are_tried_last() {
        let graph = ConstraintGraph::new(2, [(0, 1)]).expect("valid graph");
        let domains = DomainStore::from_domains(vec![vec![c(0), c(1), c(2)], vec![c(0), c(2)]]);
        let mut state = SearchState::new(&graph, domains);
        let _ = state.domains.remove(x(1), c(2));

        let order =
            LeastConstrainingValue.order_values(&mut SelectionContext::new(&mut state), x(0));

        assert_eq!(vec![c(1), c(2), c(0)], order);
    }

    #[test]
    fn probing_leaves_the_state_untouched() {
        let graph = ConstraintGraph::new(3, [(0, 1), (1, 2), (0, 2)]).expect("valid graph");
        let mut state = SearchState::new(&graph, DomainStore::new(3, 3));
        state.assignment.assign(x(2), c(1));
        let before = state.domains.to_vecs();

        let order =
            LeastConstrainingValue.order_values(&mut SelectionContext::new(&mut state), x(0));

        assert_eq!(vec![c(0), c(1), c(2)], order);
        assert_eq!(before, state.domains.to_vecs());
        assert_eq!(None, state.assignment.value(x(0)));
        assert_eq!(0, state.domains.num_open_checkpoints());
    }
}
