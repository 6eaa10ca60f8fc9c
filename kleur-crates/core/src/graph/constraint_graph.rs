use itertools::Itertools;
use log::warn;
use thiserror::Error;

use crate::basic_types::VariableId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// The reasons for which a [`ConstraintGraph`] cannot be constructed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A variable which is adjacent to itself can never receive a colour.
    #[error("{variable} is adjacent to itself")]
    SelfLoop { variable: VariableId },

    #[error("the edge endpoint {endpoint} is out of range for a graph with {num_variables} variables")]
    VariableOutOfRange { endpoint: usize, num_variables: usize },

    #[error("{num_variables} variables do not fit in the variable identifiers")]
    TooManyVariables { num_variables: usize },
}

/// The "not equal" constraints of a colouring instance, one for every pair of adjacent variables.
///
/// The graph is undirected: if `u` is a neighbour of `v`, then `v` is a neighbour of `u`. The
/// neighbours of a variable are stored sorted and without duplicates, and the graph cannot be
/// changed after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintGraph {
    neighbours: KeyedVec<VariableId, Vec<VariableId>>,
    num_edges: usize,
}

impl ConstraintGraph {
    /// Creates the graph over the variables `0..num_variables` with the given undirected edges.
    /// Every edge may be given in either direction and duplicates are merged.
    ///
    /// # Example
    /// ```rust
    /// # use kleur_core::graph::ConstraintGraph;
    /// # use kleur_core::VariableId;
    /// let triangle = ConstraintGraph::new(3, [(0, 1), (1, 2), (2, 0)]).expect("valid graph");
    ///
    /// assert_eq!(3, triangle.num_edges());
    /// assert!(triangle.are_adjacent(VariableId::new(0), VariableId::new(2)));
    /// ```
    pub fn new(
        num_variables: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<ConstraintGraph, GraphError> {
        if u32::try_from(num_variables).is_err() {
            return Err(GraphError::TooManyVariables { num_variables });
        }

        let mut neighbours: KeyedVec<VariableId, Vec<VariableId>> =
            KeyedVec::from_fn(num_variables, |_| Vec::new());

        for (u, v) in edges {
            for endpoint in [u, v] {
                if endpoint >= num_variables {
                    return Err(GraphError::VariableOutOfRange {
                        endpoint,
                        num_variables,
                    });
                }
            }

            let u = VariableId::create_from_index(u);
            let v = VariableId::create_from_index(v);

            if u == v {
                return Err(GraphError::SelfLoop { variable: u });
            }

            neighbours[u].push(v);
            neighbours[v].push(u);
        }

        for adjacent in neighbours.iter_mut() {
            adjacent.sort_unstable();
            adjacent.dedup();
        }

        let num_edges = neighbours.iter().map(Vec::len).sum::<usize>() / 2;

        if num_variables == 0 {
            warn!("The constraint graph does not contain any variables");
        }

        Ok(ConstraintGraph {
            neighbours,
            num_edges,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.neighbours.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.neighbours.keys()
    }

    /// The variables adjacent to `variable`, in increasing order.
    pub fn neighbours(&self, variable: VariableId) -> &[VariableId] {
        &self.neighbours[variable]
    }

    pub fn degree(&self, variable: VariableId) -> usize {
        self.neighbours[variable].len()
    }

    pub fn are_adjacent(&self, u: VariableId, v: VariableId) -> bool {
        self.neighbours[u].binary_search(&v).is_ok()
    }

    /// Every edge exactly once, as a pair `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.neighbours
            .iter_with_keys()
            .flat_map(|(u, adjacent)| adjacent.iter().map(move |&v| (u, v)))
            .filter(|(u, v)| u < v)
    }

    /// Every edge in both directions; these are the arcs which arc consistency revises.
    pub fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.neighbours
            .iter_with_keys()
            .flat_map(|(u, adjacent)| adjacent.iter().map(move |&v| (u, v)))
    }

    /// A one-line description of the size of the graph for the logs.
    pub fn summary(&self) -> String {
        format!(
            "{} variables, {} edges, degrees {}",
            self.num_variables(),
            self.num_edges(),
            self.neighbours
                .iter()
                .map(Vec::len)
                .minmax()
                .into_option()
                .map(|(min, max)| format!("in [{min}, {max}]"))
                .unwrap_or_else(|| "undefined".to_owned())
        )
    }
}
