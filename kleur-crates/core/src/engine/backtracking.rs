use log::debug;
use log::trace;

use crate::api::AssignmentObserver;
use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::SearchOutcome;
use crate::engine::SearchState;
use crate::engine::SearchStatistics;
use crate::kleur_assert_eq_simple;
use crate::propagation::ConsistencyFilter;
use crate::propagation::PropagationContext;
use crate::termination::TerminationCondition;

/// Depth-first search over partial assignments.
///
/// Every level of the search selects an unassigned variable and tries its candidate colours in
/// turn. A candidate is assigned inside a domain checkpoint, checked against the assigned
/// neighbours and propagated; if this succeeds the search descends. A candidate which fails,
/// either immediately or because the subtree below it is exhausted, is unassigned and its
/// checkpoint restored, which counts as a backtrack.
#[derive(Debug)]
pub struct BacktrackingSearch<B> {
    filter: Box<dyn ConsistencyFilter>,
    brancher: B,
}

impl<B: Brancher> BacktrackingSearch<B> {
    pub fn new(filter: Box<dyn ConsistencyFilter>, brancher: B) -> BacktrackingSearch<B> {
        BacktrackingSearch { filter, brancher }
    }

    /// Searches for a complete consistent extension of the assignment in `state`.
    ///
    /// On [`SearchOutcome::Solved`] the state holds the solution. Otherwise the domains and the
    /// assignment are left exactly as they were when the search started.
    pub fn solve(
        &mut self,
        state: &mut SearchState,
        termination: &mut dyn TerminationCondition,
        observer: &mut dyn AssignmentObserver,
        statistics: &mut SearchStatistics,
    ) -> SearchOutcome {
        debug!(
            "Starting backtracking search with {} over {} variables",
            self.filter.name(),
            state.graph.num_variables()
        );

        let open_checkpoints = state.domains.num_open_checkpoints();
        let outcome = self.search(state, termination, observer, statistics, 0);

        if outcome != SearchOutcome::Solved {
            kleur_assert_eq_simple!(open_checkpoints, state.domains.num_open_checkpoints());
        }
        debug!("Backtracking search finished: {outcome:?}");

        outcome
    }

    fn search(
        &mut self,
        state: &mut SearchState,
        termination: &mut dyn TerminationCondition,
        observer: &mut dyn AssignmentObserver,
        statistics: &mut SearchStatistics,
        depth: usize,
    ) -> SearchOutcome {
        statistics.peak_depth = statistics.peak_depth.max(depth);

        let mut context = SelectionContext::new(state);
        let Some(variable) = self.brancher.next_variable(&mut context) else {
            return SearchOutcome::Solved;
        };
        let candidates = self.brancher.order_values(&mut context, variable);

        for colour in candidates {
            if termination.should_stop() {
                return SearchOutcome::Interrupted;
            }

            let checkpoint = state.domains.snapshot();
            state.assignment.assign(variable, colour);
            statistics.num_decisions += 1;
            observer.on_assignment_changed(&state.assignment);
            trace!("depth {depth}: {variable} = {colour}");

            let outcome = if self.is_consistent(state, variable, colour, statistics) {
                self.search(state, termination, observer, statistics, depth + 1)
            } else {
                SearchOutcome::Exhausted
            };

            if outcome == SearchOutcome::Solved {
                return outcome;
            }

            state.assignment.unassign(variable);
            state.domains.restore(checkpoint);
            observer.on_assignment_changed(&state.assignment);

            if outcome == SearchOutcome::Interrupted {
                return outcome;
            }

            statistics.num_backtracks += 1;
            trace!("depth {depth}: {variable} = {colour} failed");
        }

        SearchOutcome::Exhausted
    }

    /// Checks the new assignment against the assigned neighbours and propagates it.
    fn is_consistent(
        &mut self,
        state: &mut SearchState,
        variable: VariableId,
        colour: Colour,
        statistics: &mut SearchStatistics,
    ) -> bool {
        if !state.assignment.is_consistent_at(state.graph, variable) {
            return false;
        }

        let mut context = PropagationContext::new(state.graph, &mut state.domains, &state.assignment);
        let status = self.filter.propagate(&mut context, variable, colour);
        statistics.num_pruned_values += context.num_pruned() as u64;

        if let Err(empty_domain) = status {
            trace!("propagation emptied the domain of {}", empty_domain.variable);
            return false;
        }

        true
    }
}
