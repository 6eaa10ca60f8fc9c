use std::iter::Rev;
use std::vec::Drain;

use crate::kleur_assert_simple;

/// An undo log which is split into nested scopes by checkpoints.
///
/// Entries are recorded at the innermost open scope; undoing to a checkpoint returns (newest
/// first) every entry which was recorded after that checkpoint was opened.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_checkpoint: usize,
    /// At index i is the position on the trail where the scope of checkpoint i + 1 starts
    checkpoint_starts: Vec<usize>,
    entries: Vec<T>,
}

// Not derived to avoid requiring `T: Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: 0,
            checkpoint_starts: Vec::new(),
            entries: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    /// Opens a new scope and returns the checkpoint which was current before it was opened; undoing
    /// to the returned checkpoint discards everything recorded in the new scope.
    pub(crate) fn new_checkpoint(&mut self) -> usize {
        let previous = self.current_checkpoint;
        self.current_checkpoint += 1;
        self.checkpoint_starts.push(self.entries.len());
        previous
    }

    pub(crate) fn get_checkpoint(&self) -> usize {
        self.current_checkpoint
    }

    /// Closes every scope opened after `checkpoint` and returns their entries in reverse order of
    /// recording.
    pub(crate) fn undo_to(&mut self, checkpoint: usize) -> Rev<Drain<'_, T>> {
        kleur_assert_simple!(
            checkpoint < self.current_checkpoint,
            "cannot undo to checkpoint {checkpoint}, the current checkpoint is {}",
            self.current_checkpoint
        );

        let scope_start = self.checkpoint_starts[checkpoint];

        self.current_checkpoint = checkpoint;
        self.checkpoint_starts.truncate(checkpoint);
        self.entries.drain(scope_start..).rev()
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
