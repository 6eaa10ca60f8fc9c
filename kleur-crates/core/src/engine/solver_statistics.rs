use std::time::Duration;

use crate::statistics::log_statistic;

/// Counters which are maintained by the search engines during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of tentative assignments made by backtracking search.
    pub num_decisions: u64,
    /// The number of candidate colours which were undone after they failed.
    pub num_backtracks: u64,
    /// The deepest level of the search tree which was reached.
    pub peak_depth: usize,
    /// The number of colours removed from domains by propagation.
    pub num_pruned_values: u64,
    /// The number of repairs performed by local search.
    pub num_local_search_steps: u64,
    pub solve_time: Duration,
}

impl SearchStatistics {
    pub fn log(&self) {
        log_statistic("decisions", self.num_decisions);
        log_statistic("backtracks", self.num_backtracks);
        log_statistic("peakDepth", self.peak_depth);
        log_statistic("prunedValues", self.num_pruned_values);
        log_statistic("localSearchSteps", self.num_local_search_steps);
        log_statistic("solveTime", self.solve_time.as_secs_f64());
    }
}
