use itertools::Itertools;
use log::debug;
use log::trace;

use crate::api::AssignmentObserver;
use crate::basic_types::Random;
use crate::basic_types::VariableId;
use crate::engine::SearchOutcome;
use crate::engine::SearchState;
use crate::engine::SearchStatistics;
use crate::kleur_assert_advanced;
use crate::kleur_assert_simple;
use crate::termination::TerminationCondition;

/// Iterative repair with the min-conflicts heuristic.
///
/// Every variable starts with a uniformly random colour of its domain. As long as some edge is
/// violated, a random conflicted variable is recoloured with a colour of its domain that minimises
/// the number of violated edges, breaking ties at random. The search gives up after `max_steps`
/// repairs.
///
/// The random generator is only asked for a number when there is more than one option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinConflicts {
    max_steps: usize,
}

impl Default for MinConflicts {
    fn default() -> Self {
        MinConflicts { max_steps: 100 }
    }
}

impl MinConflicts {
    pub fn new(max_steps: usize) -> MinConflicts {
        MinConflicts { max_steps }
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Runs the local search on `state`, overwriting its assignment.
    ///
    /// Returns [`SearchOutcome::Exhausted`] when the step budget is spent without resolving all
    /// conflicts; the state then holds the last (complete) assignment.
    pub fn solve(
        &self,
        state: &mut SearchState,
        random: &mut dyn Random,
        termination: &mut dyn TerminationCondition,
        observer: &mut dyn AssignmentObserver,
        statistics: &mut SearchStatistics,
    ) -> SearchOutcome {
        debug!(
            "Starting min-conflicts over {} variables with a budget of {} steps",
            state.graph.num_variables(),
            self.max_steps
        );

        self.initialise(state, random);
        observer.on_assignment_changed(&state.assignment);

        let mut num_steps = 0;
        loop {
            let conflicted = state
                .graph
                .variables()
                .filter(|&variable| state.assignment.is_conflicted(state.graph, variable))
                .collect::<Vec<_>>();

            if state.assignment.is_complete() && conflicted.is_empty() {
                debug!("Min-conflicts converged after {num_steps} steps");
                return SearchOutcome::Solved;
            }

            if num_steps >= self.max_steps {
                debug!(
                    "Min-conflicts gave up with {} violated edges",
                    state.assignment.num_violations(state.graph)
                );
                return SearchOutcome::Exhausted;
            }

            if termination.should_stop() {
                return SearchOutcome::Interrupted;
            }

            let variable = conflicted[choose_index(random, conflicted.len())];
            self.repair(state, random, variable);

            num_steps += 1;
            statistics.num_local_search_steps += 1;
            observer.on_assignment_changed(&state.assignment);
        }
    }

    fn initialise(&self, state: &mut SearchState, random: &mut dyn Random) {
        for variable in state.graph.variables() {
            let domain = state.domains.get(variable);
            kleur_assert_simple!(!domain.is_empty(), "{variable} has an empty domain");

            let colour = domain[choose_index(random, domain.len())];
            state.assignment.assign(variable, colour);
        }
    }

    /// Gives `variable` a colour which minimises the number of violated edges.
    fn repair(&self, state: &mut SearchState, random: &mut dyn Random, variable: VariableId) {
        let graph = state.graph;
        let violations_before = state.assignment.num_violations(graph);
        let current_conflicts = state.assignment.value(variable).map_or(0, |colour| {
            state
                .assignment
                .num_neighbours_with_colour(graph, variable, colour)
        });

        // Only the edges at `variable` change, so minimising their violations minimises the total.
        let best = state
            .domains
            .get(variable)
            .iter()
            .copied()
            .min_set_by_key(|&colour| {
                state
                    .assignment
                    .num_neighbours_with_colour(graph, variable, colour)
            });

        let colour = best[choose_index(random, best.len())];
        let new_conflicts = state
            .assignment
            .num_neighbours_with_colour(graph, variable, colour);

        trace!("recolouring {variable} with {colour} ({new_conflicts} conflicts remain)");
        state.assignment.assign(variable, colour);

        kleur_assert_advanced!(
            violations_before + new_conflicts - current_conflicts
                == state.assignment.num_violations(graph)
        );
    }
}

/// Picks an index in `0..len`, only consulting `random` when there is a choice.
fn choose_index(random: &mut dyn Random, len: usize) -> usize {
    if len > 1 {
        random.generate_usize_in_range(0..len)
    } else {
        0
    }
}
