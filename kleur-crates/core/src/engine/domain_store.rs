use crate::basic_types::Colour;
use crate::basic_types::Trail;
use crate::basic_types::VariableId;
use crate::containers::KeyedVec;
use crate::kleur_assert_moderate;
use crate::kleur_assert_simple;

/// A change to a single domain, recorded so that it can be undone.
#[derive(Clone, Debug)]
enum DomainChange {
    /// `colour` was removed from the domain of `variable` where it was at index `position`.
    Removed {
        variable: VariableId,
        colour: Colour,
        position: usize,
    },
    /// The domain of `variable` was overwritten; `previous` holds its old contents.
    Replaced {
        variable: VariableId,
        previous: Vec<Colour>,
    },
}

/// A point to which a [`DomainStore`] can be restored, obtained from [`DomainStore::snapshot`].
#[derive(Debug, PartialEq, Eq)]
#[allow(
    missing_copy_implementations,
    reason = "a checkpoint is consumed when the store is restored to it"
)]
pub struct DomainCheckpoint {
    checkpoint: usize,
}

/// Stores the ordered sequence of candidate colours of every variable.
///
/// Domains can be pruned freely; every change made while a checkpoint is open is recorded on a
/// trail. [`DomainStore::restore`] undoes exactly the changes made since the corresponding
/// [`DomainStore::snapshot`], putting every colour back at its original position, so that the
/// pruning done while exploring one branch of the search is never observed by its siblings.
///
/// Changes made while no checkpoint is open are permanent.
#[derive(Clone, Debug)]
pub struct DomainStore {
    domains: KeyedVec<VariableId, Vec<Colour>>,
    trail: Trail<DomainChange>,
}

impl DomainStore {
    /// Creates a store in which every variable can take any of the colours `0..num_colours`.
    pub fn new(num_variables: usize, num_colours: u32) -> DomainStore {
        DomainStore {
            domains: KeyedVec::from_fn(num_variables, |_| Colour::palette(num_colours).collect()),
            trail: Trail::default(),
        }
    }

    /// Creates a store with the given initial domain for every variable.
    pub fn from_domains(domains: Vec<Vec<Colour>>) -> DomainStore {
        DomainStore {
            domains: KeyedVec::from(domains),
            trail: Trail::default(),
        }
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// The candidate colours of `variable`, in their current order.
    pub fn get(&self, variable: VariableId) -> &[Colour] {
        &self.domains[variable]
    }

    pub fn size(&self, variable: VariableId) -> usize {
        self.domains[variable].len()
    }

    pub fn is_empty(&self, variable: VariableId) -> bool {
        self.domains[variable].is_empty()
    }

    pub fn contains(&self, variable: VariableId, colour: Colour) -> bool {
        self.domains[variable].contains(&colour)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &[Colour])> + '_ {
        self.domains
            .iter_with_keys()
            .map(|(variable, domain)| (variable, domain.as_slice()))
    }

    /// Removes `colour` from the domain of `variable`; the order of the remaining colours is
    /// preserved. Returns whether the domain contained `colour`.
    pub fn remove(&mut self, variable: VariableId, colour: Colour) -> bool {
        let Some(position) = self.domains[variable].iter().position(|&c| c == colour) else {
            return false;
        };

        let _ = self.domains[variable].remove(position);
        self.record(DomainChange::Removed {
            variable,
            colour,
            position,
        });

        true
    }

    /// Overwrites the domain of `variable` with `colours`.
    pub fn set(&mut self, variable: VariableId, colours: Vec<Colour>) {
        let previous = std::mem::replace(&mut self.domains[variable], colours);
        self.record(DomainChange::Replaced { variable, previous });
    }

    /// Opens a new scope for changes and returns the checkpoint to which the store can be
    /// restored. Checkpoints nest.
    pub fn snapshot(&mut self) -> DomainCheckpoint {
        DomainCheckpoint {
            checkpoint: self.trail.new_checkpoint(),
        }
    }

    /// Undoes every change made since `checkpoint` was taken. Any checkpoint taken after
    /// `checkpoint` is discarded and may no longer be restored.
    pub fn restore(&mut self, checkpoint: DomainCheckpoint) {
        kleur_assert_simple!(
            checkpoint.checkpoint < self.trail.get_checkpoint(),
            "the checkpoint has already been discarded by restoring an earlier one"
        );

        for change in self.trail.undo_to(checkpoint.checkpoint) {
            match change {
                DomainChange::Removed {
                    variable,
                    colour,
                    position,
                } => {
                    kleur_assert_moderate!(position <= self.domains[variable].len());
                    self.domains[variable].insert(position, colour);
                }
                DomainChange::Replaced { variable, previous } => {
                    self.domains[variable] = previous;
                }
            }
        }
    }

    /// The number of checkpoints which have been taken and not yet restored.
    pub fn num_open_checkpoints(&self) -> usize {
        self.trail.get_checkpoint()
    }

    fn record(&mut self, change: DomainChange) {
        if self.trail.get_checkpoint() > 0 {
            self.trail.push(change);
        }
    }

    /// Returns the first variable with an empty domain, if there is one.
    pub(crate) fn find_empty_domain(&self) -> Option<VariableId> {
        self.domains
            .iter_with_keys()
            .find(|(_, domain)| domain.is_empty())
            .map(|(variable, _)| variable)
    }

    #[cfg(test)]
    pub(crate) fn to_vecs(&self) -> Vec<Vec<u32>> {
        self.domains
            .iter()
            .map(|domain| domain.iter().map(Colour::id).collect())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn trail_len(&self) -> usize {
        self.trail.len()
    }
}
