use crate::engine::Assignment;
use crate::engine::DomainStore;
use crate::graph::ConstraintGraph;

/// The mutable state of one solving run: the current domains and the current assignment, together
/// with the (immutable) graph they are defined over.
#[derive(Clone, Debug)]
pub struct SearchState<'graph> {
    pub(crate) graph: &'graph ConstraintGraph,
    pub(crate) domains: DomainStore,
    pub(crate) assignment: Assignment,
}

impl<'graph> SearchState<'graph> {
    /// Creates a state in which no variable is assigned.
    pub fn new(graph: &'graph ConstraintGraph, domains: DomainStore) -> SearchState<'graph> {
        SearchState {
            graph,
            assignment: Assignment::empty(graph.num_variables()),
            domains,
        }
    }

    pub fn graph(&self) -> &'graph ConstraintGraph {
        self.graph
    }

    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
}
