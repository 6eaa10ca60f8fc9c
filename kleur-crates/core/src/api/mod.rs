mod observer;
mod outputs;
pub(crate) mod solver;
mod solver_options;

#[cfg(test)]
pub(crate) use observer::RecordingObserver;
pub use observer::AssignmentObserver;
pub use observer::SilentObserver;

pub mod results {
    //! Contains the outputs of solving with the [`Solver`].
    //!
    //! A run ends in a [`SatisfactionResult`]: a [`Solution`], the proof that no colouring with
    //! the given number of colours exists, or neither of the two.
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! [`SolverOptions`] describe the instance-wide settings, a [`SearchStrategy`] determines which
    //! engine is used for a single call to [`Solver::satisfy`].
    pub use crate::api::solver_options::BacktrackingOptions;
    pub use crate::api::solver_options::LocalSearchOptions;
    pub use crate::api::solver_options::SearchStrategy;
    pub use crate::api::solver_options::SolverOptions;
    pub use crate::propagation::PropagationMode;
    #[cfg(doc)]
    use crate::Solver;
}
