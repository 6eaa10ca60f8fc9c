use std::fmt::Debug;
use std::fmt::Display;

use crate::basic_types::Colour;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;
use crate::propagation::ArcConsistency;
use crate::propagation::ForwardChecking;
use crate::propagation::NoPropagation;
use crate::propagation::PropagationContext;

/// A filter which is invoked after `variable` has been tentatively assigned `value`, and which
/// removes colours from the domains which can no longer be part of an extension of the current
/// assignment.
pub trait ConsistencyFilter: Debug {
    fn name(&self) -> &str;

    /// Prunes the domains given that `variable` has just been assigned `value`.
    ///
    /// Returns an [`EmptyDomain`](crate::basic_types::EmptyDomain) error if the domain of some
    /// variable became empty. The changes made before the failure are left in the domains.
    fn propagate(
        &mut self,
        context: &mut PropagationContext,
        variable: VariableId,
        value: Colour,
    ) -> PropagationStatus;
}

/// Determines which [`ConsistencyFilter`] is used during backtracking search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PropagationMode {
    /// Only check the new assignment against the assigned neighbours; see [`NoPropagation`].
    None,
    /// See [`ForwardChecking`].
    #[default]
    ForwardChecking,
    /// See [`ArcConsistency`].
    ArcConsistency,
}

impl PropagationMode {
    pub fn create_filter(self) -> Box<dyn ConsistencyFilter> {
        match self {
            PropagationMode::None => Box::new(NoPropagation),
            PropagationMode::ForwardChecking => Box::new(ForwardChecking),
            PropagationMode::ArcConsistency => Box::<ArcConsistency>::default(),
        }
    }
}

impl Display for PropagationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationMode::None => write!(f, "none"),
            PropagationMode::ForwardChecking => write!(f, "forward-check"),
            PropagationMode::ArcConsistency => write!(f, "arc-consistency"),
        }
    }
}
