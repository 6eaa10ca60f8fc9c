use std::fmt::Display;

use kleur_solver::core::SolverError;
use kleur_solver::parsers::dimacs::DimacsParseError;
use thiserror::Error;

pub(crate) type KleurResult<T> = Result<T, KleurError>;

#[derive(Error, Debug)]
pub(crate) enum KleurError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {0} is not supported.")]
    InvalidInstanceFile(String),
    #[error("The graph file was invalid, more details: {0}")]
    InvalidGraph(#[from] DimacsParseError),
    #[error("The solver encountered an internal fault: {0}")]
    Solver(#[from] SolverError),
    #[error("The option {0} is required unless the mode is 'local-search'.")]
    MissingOrderingFlag(&'static str),
}

impl KleurError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }
}
