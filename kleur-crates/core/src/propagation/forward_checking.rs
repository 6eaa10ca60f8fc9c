use crate::basic_types::Colour;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;
use crate::propagation::ConsistencyFilter;
use crate::propagation::PropagationContext;

/// Removes the newly assigned colour from the domain of every unassigned neighbour of the
/// assigned variable.
///
/// Only direct neighbours are considered; the reduced domains are not propagated any further.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardChecking;

impl ConsistencyFilter for ForwardChecking {
    fn name(&self) -> &str {
        "ForwardChecking"
    }

    fn propagate(
        &mut self,
        context: &mut PropagationContext,
        variable: VariableId,
        value: Colour,
    ) -> PropagationStatus {
        let graph = context.graph();
        let assignment = context.assignment();

        for &neighbour in graph.neighbours(variable) {
            if assignment.is_assigned(neighbour) {
                continue;
            }

            context.remove(neighbour, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::EmptyDomain;
    use crate::engine::Assignment;
    use crate::engine::DomainStore;
    use crate::graph::ConstraintGraph;

    fn x(id: u32) -> VariableId {
        VariableId::new(id)
    }

    fn c(id: u32) -> Colour {
        Colour::new(id)
    }

    #[test]
    fn only_unassigned_neighbours_are_pruned() {
        // 0 - 1 - 2, and 3 is isolated
        let graph = ConstraintGraph::new(4, [(0, 1), (1, 2)]).expect("valid graph");
        let mut domains = DomainStore::new(4, 3);
        let mut assignment = Assignment::empty(4);
        assignment.assign(x(0), c(1));
        assignment.assign(x(1), c(1));

        let mut context = PropagationContext::new(&graph, &mut domains, &assignment);
        let result = ForwardChecking.propagate(&mut context, x(1), c(1));

        assert_eq!(Ok(()), result);
        assert_eq!(1, context.num_pruned());
        assert_eq!(
            vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 2], vec![0, 1, 2]],
            domains.to_vecs()
        );
    }

    #[test]
    fn removed_colours_are_the_assigned_colour() {
        let graph = ConstraintGraph::new(4, [(0, 1), (0, 2), (0, 3)]).expect("valid graph");
        let mut domains = DomainStore::new(4, 4);
        let mut assignment = Assignment::empty(4);
        assignment.assign(x(0), c(2));

        let before = domains.to_vecs();
        let mut context = PropagationContext::new(&graph, &mut domains, &assignment);
        let _ = ForwardChecking.propagate(&mut context, x(0), c(2));

        for (old, new) in before.iter().zip(domains.to_vecs()) {
            let removed = old
                .iter()
                .filter(|colour| !new.contains(colour))
                .collect::<Vec<_>>();
            assert!(removed.is_empty() || removed == vec![&2]);
        }
    }

    #[test]
    fn a_wiped_out_neighbour_fails() {
        let graph = ConstraintGraph::new(2, [(0, 1)]).expect("valid graph");
        let mut domains = DomainStore::from_domains(vec![vec![c(0), c(1)], vec![c(0)]]);
        let mut assignment = Assignment::empty(2);
        assignment.assign(x(0), c(0));

        let mut context = PropagationContext::new(&graph, &mut domains, &assignment);
        let result = ForwardChecking.propagate(&mut context, x(0), c(0));

        assert_eq!(Err(EmptyDomain { variable: x(1) }), result);
    }
}
