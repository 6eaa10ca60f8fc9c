//! A [`TerminationCondition`] is polled by the search engines between branch attempts and between
//! repair steps. It tells the solver to give up before a definitive answer is found, for example
//! because the [`TimeBudget`] is spent.

mod combinator;
mod indefinite;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Determines when the solver should stop searching.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }
}
