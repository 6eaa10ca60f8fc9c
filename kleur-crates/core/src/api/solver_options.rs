use std::num::NonZeroU32;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::propagation::PropagationMode;

/// The options which apply to every call to [`Solver::satisfy`](crate::Solver::satisfy).
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// The number of colours; every variable starts with the domain `0..num_colours`.
    pub num_colours: NonZeroU32,
    /// The random generator used by local search.
    pub random_generator: SmallRng,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            num_colours: NonZeroU32::MIN.saturating_add(3),
            random_generator: SmallRng::seed_from_u64(42),
        }
    }
}

/// Selects the engine used to look for a colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Complete depth-first search; see [`BacktrackingSearch`](crate::engine::BacktrackingSearch).
    Backtracking(BacktrackingOptions),
    /// Incomplete iterative repair; see [`MinConflicts`](crate::engine::MinConflicts).
    LocalSearch(LocalSearchOptions),
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::Backtracking(BacktrackingOptions::default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackingOptions {
    /// The consistency filter applied after every tentative assignment.
    pub propagation: PropagationMode,
    /// Branch on the most constrained variable instead of the lowest-numbered one.
    pub variable_ordering: bool,
    /// Try the least constraining colour first instead of following the domain order.
    pub value_ordering: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalSearchOptions {
    /// The maximum number of repairs before giving up.
    pub max_steps: usize,
}

impl Default for LocalSearchOptions {
    fn default() -> Self {
        LocalSearchOptions { max_steps: 100 }
    }
}
