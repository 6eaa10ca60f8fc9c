use std::path::Path;

/// The instance formats understood by the solver.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) enum FileFormat {
    /// The DIMACS graph format, see [`kleur_solver::parsers::dimacs`].
    DimacsGraph,
}

impl FileFormat {
    /// Determines the format from the extension of `path`.
    pub(crate) fn of_instance(path: &Path) -> Option<FileFormat> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("col") => Some(FileFormat::DimacsGraph),
            _ => None,
        }
    }
}
