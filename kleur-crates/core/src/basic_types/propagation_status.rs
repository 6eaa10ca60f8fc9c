use crate::basic_types::VariableId;

/// The result of invoking a consistency filter. Propagation either succeeds or empties the domain
/// of a variable, in which case the partial assignment it was invoked for cannot be extended.
pub type PropagationStatus = Result<(), EmptyDomain>;

/// Indicates that the domain of `variable` has become empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain {
    pub variable: VariableId,
}
