//! Decides which variable is coloured next and in which order its colours are tried.
//!
//! - A [`VariableSelector`](variable_selection::VariableSelector) picks the next unassigned
//!   variable, for example [`MostConstrained`](variable_selection::MostConstrained).
//! - A [`ValueSelector`](value_selection::ValueSelector) orders the candidate colours of that
//!   variable, for example [`LeastConstrainingValue`](value_selection::LeastConstrainingValue).
//! - A [`Brancher`] combines the two; [`IndependentVariableValueBrancher`] is the default
//!   combination.

mod brancher;
mod independent_variable_value_brancher;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use independent_variable_value_brancher::IndependentVariableValueBrancher;
pub use selection_context::SelectionContext;
