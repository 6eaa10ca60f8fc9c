//! The state of a solving run and the two search engines operating on it.

mod assignment;
mod backtracking;
mod domain_store;
mod min_conflicts;
mod search_state;
mod solution_validation;
mod solver_statistics;

pub use assignment::Assignment;
pub use backtracking::BacktrackingSearch;
pub use domain_store::DomainCheckpoint;
pub use domain_store::DomainStore;
pub use min_conflicts::MinConflicts;
pub use search_state::SearchState;
pub(crate) use solution_validation::validate_solution;
pub use solver_statistics::SearchStatistics;

/// How a search engine finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The assignment of the search state is a complete consistent colouring.
    Solved,
    /// The search ran out of options: the whole tree was explored by backtracking, or the step
    /// budget of local search was spent.
    Exhausted,
    /// The termination condition triggered.
    Interrupted,
}
