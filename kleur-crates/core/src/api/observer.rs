use std::fmt::Debug;

use crate::engine::Assignment;

/// Is notified every time the search engines change the assignment.
///
/// Observers only look at the assignment; they cannot influence the search.
pub trait AssignmentObserver: Debug {
    fn on_assignment_changed(&mut self, assignment: &Assignment);
}

/// An [`AssignmentObserver`] which ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentObserver;

impl AssignmentObserver for SilentObserver {
    fn on_assignment_changed(&mut self, _assignment: &Assignment) {}
}

impl<T: AssignmentObserver + ?Sized> AssignmentObserver for &mut T {
    fn on_assignment_changed(&mut self, assignment: &Assignment) {
        (**self).on_assignment_changed(assignment)
    }
}

/// Records every notified assignment.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    pub(crate) snapshots: Vec<Assignment>,
}

#[cfg(test)]
impl AssignmentObserver for RecordingObserver {
    fn on_assignment_changed(&mut self, assignment: &Assignment) {
        self.snapshots.push(assignment.clone());
    }
}
