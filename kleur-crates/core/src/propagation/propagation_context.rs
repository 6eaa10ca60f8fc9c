use crate::basic_types::Colour;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;
use crate::engine::Assignment;
use crate::engine::DomainStore;
use crate::graph::ConstraintGraph;

/// Gives a [`ConsistencyFilter`](crate::propagation::ConsistencyFilter) access to the graph, the
/// current assignment and the (mutable) domains, and counts the colours it removes.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    graph: &'a ConstraintGraph,
    domains: &'a mut DomainStore,
    assignment: &'a Assignment,
    num_pruned: usize,
}

impl<'a> PropagationContext<'a> {
    pub fn new(
        graph: &'a ConstraintGraph,
        domains: &'a mut DomainStore,
        assignment: &'a Assignment,
    ) -> PropagationContext<'a> {
        PropagationContext {
            graph,
            domains,
            assignment,
            num_pruned: 0,
        }
    }

    pub fn graph(&self) -> &'a ConstraintGraph {
        self.graph
    }

    pub fn assignment(&self) -> &'a Assignment {
        self.assignment
    }

    pub fn domains(&self) -> &DomainStore {
        self.domains
    }

    /// Removes `colour` from the domain of `variable`, failing if the domain becomes empty.
    pub fn remove(&mut self, variable: VariableId, colour: Colour) -> PropagationStatus {
        if self.domains.remove(variable, colour) {
            self.num_pruned += 1;
        }

        if self.domains.is_empty(variable) {
            return Err(EmptyDomain { variable });
        }

        Ok(())
    }

    /// Reduces the domain of `variable` to the single colour `colour`.
    ///
    /// The removed colours are counted as pruned. Fails if `colour` is not in the domain.
    pub fn fix(&mut self, variable: VariableId, colour: Colour) -> PropagationStatus {
        if !self.domains.contains(variable, colour) {
            self.num_pruned += self.domains.size(variable);
            self.domains.set(variable, vec![]);
            return Err(EmptyDomain { variable });
        }

        let size = self.domains.size(variable);
        if size > 1 {
            self.num_pruned += size - 1;
            self.domains.set(variable, vec![colour]);
        }

        Ok(())
    }

    /// The number of colours removed through this context so far.
    pub fn num_pruned(&self) -> usize {
        self.num_pruned
    }
}
