//! Consistency filters prune the domains of the variables after a tentative assignment, so that
//! the search notices early that a partial assignment cannot be extended to a colouring.
//!
//! Every filter implements [`ConsistencyFilter`]; the filter which is used by the backtracking
//! search is selected through [`PropagationMode`]. Filters operate on the live domains through a
//! [`PropagationContext`] and never undo their own changes: the search opens a checkpoint before
//! propagating and restores it when the branch is abandoned.

mod arc_consistency;
mod consistency_filter;
mod forward_checking;
mod no_propagation;
mod propagation_context;

pub use arc_consistency::ArcConsistency;
pub use consistency_filter::ConsistencyFilter;
pub use consistency_filter::PropagationMode;
pub use forward_checking::ForwardChecking;
pub use no_propagation::NoPropagation;
pub use propagation_context::PropagationContext;
