use std::time::Instant;

use log::debug;
use log::warn;
use rand::rngs::SmallRng;

use crate::api::results::SatisfactionResult;
use crate::api::options::SearchStrategy;
use crate::api::options::SolverOptions;
use crate::api::AssignmentObserver;
use crate::basic_types::Colour;
use crate::basic_types::SolverError;
use crate::basic_types::VariableId;
use crate::branching::IndependentVariableValueBrancher;
use crate::engine::validate_solution;
use crate::engine::BacktrackingSearch;
use crate::engine::DomainStore;
use crate::engine::MinConflicts;
use crate::engine::SearchOutcome;
use crate::engine::SearchState;
use crate::engine::SearchStatistics;
use crate::graph::ConstraintGraph;
use crate::statistics::log_statistic_postfix;
use crate::termination::TerminationCondition;

/// The main interaction point: owns an instance and solves it with one of the search engines.
///
/// ```rust
/// # use kleur_core::graph::ConstraintGraph;
/// # use kleur_core::options::BacktrackingOptions;
/// # use kleur_core::options::PropagationMode;
/// # use kleur_core::options::SearchStrategy;
/// # use kleur_core::results::SatisfactionResult;
/// # use kleur_core::termination::Indefinite;
/// # use kleur_core::SilentObserver;
/// # use kleur_core::Solver;
/// let triangle = ConstraintGraph::new(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
/// let mut solver = Solver::new(triangle);
///
/// let strategy = SearchStrategy::Backtracking(BacktrackingOptions {
///     propagation: PropagationMode::ForwardChecking,
///     variable_ordering: true,
///     value_ordering: false,
/// });
/// let result = solver
///     .satisfy(&strategy, &mut Indefinite, &mut SilentObserver)
///     .unwrap();
///
/// let SatisfactionResult::Satisfiable(solution) = result else {
///     panic!("a triangle can be coloured with four colours");
/// };
/// assert_eq!(3, solution.colours().count());
/// assert_eq!(0, solver.statistics().num_backtracks);
/// ```
#[derive(Debug)]
pub struct Solver {
    graph: ConstraintGraph,
    initial_domains: DomainStore,
    random_generator: SmallRng,
    statistics: SearchStatistics,
}

impl Solver {
    /// Creates a solver for `graph` with the default [`SolverOptions`].
    pub fn new(graph: ConstraintGraph) -> Solver {
        Solver::with_options(graph, SolverOptions::default())
    }

    pub fn with_options(graph: ConstraintGraph, options: SolverOptions) -> Solver {
        debug!(
            "Creating solver for {} with {} colours",
            graph.summary(),
            options.num_colours
        );

        Solver {
            initial_domains: DomainStore::new(graph.num_variables(), options.num_colours.get()),
            graph,
            random_generator: options.random_generator,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// The domains every run starts from.
    pub fn initial_domains(&self) -> &DomainStore {
        &self.initial_domains
    }

    /// Limits the colours `variable` may take to those of `colours`.
    ///
    /// Colours which are not in the current domain of `variable` are ignored.
    pub fn restrict_domain(
        &mut self,
        variable: VariableId,
        colours: impl IntoIterator<Item = Colour>,
    ) {
        let allowed = colours.into_iter().collect::<Vec<_>>();
        let restricted = self
            .initial_domains
            .get(variable)
            .iter()
            .copied()
            .filter(|colour| allowed.contains(colour))
            .collect::<Vec<_>>();

        if restricted.is_empty() {
            warn!("Restricting the domain of {variable} leaves no colours");
        }

        self.initial_domains.set(variable, restricted);
    }

    /// Looks for a colouring with the given `strategy`.
    ///
    /// The search stops early when `termination` triggers; in that case the result is
    /// [`SatisfactionResult::Unknown`]. `observer` is notified of every change to the assignment.
    ///
    /// An error is only returned for problems with the instance itself (a variable without
    /// colours) and for internal faults.
    pub fn satisfy(
        &mut self,
        strategy: &SearchStrategy,
        termination: &mut impl TerminationCondition,
        observer: &mut impl AssignmentObserver,
    ) -> Result<SatisfactionResult, SolverError> {
        if let Some(variable) = self.initial_domains.find_empty_domain() {
            return Err(SolverError::EmptyInitialDomain { variable });
        }

        self.statistics = SearchStatistics::default();
        let started_at = Instant::now();
        let mut state = SearchState::new(&self.graph, self.initial_domains.clone());

        let result = match strategy {
            SearchStrategy::Backtracking(options) => {
                let mut search = BacktrackingSearch::new(
                    options.propagation.create_filter(),
                    IndependentVariableValueBrancher::from_orderings(
                        options.variable_ordering,
                        options.value_ordering,
                    ),
                );

                match search.solve(&mut state, termination, observer, &mut self.statistics) {
                    SearchOutcome::Solved => SatisfactionResult::Satisfiable(validate_solution(
                        &self.graph,
                        &self.initial_domains,
                        &state.assignment,
                    )?),
                    SearchOutcome::Exhausted => SatisfactionResult::Unsatisfiable,
                    SearchOutcome::Interrupted => SatisfactionResult::Unknown,
                }
            }
            SearchStrategy::LocalSearch(options) => {
                let search = MinConflicts::new(options.max_steps);

                match search.solve(
                    &mut state,
                    &mut self.random_generator,
                    termination,
                    observer,
                    &mut self.statistics,
                ) {
                    SearchOutcome::Solved => SatisfactionResult::Satisfiable(validate_solution(
                        &self.graph,
                        &self.initial_domains,
                        &state.assignment,
                    )?),
                    SearchOutcome::Exhausted | SearchOutcome::Interrupted => {
                        SatisfactionResult::Unknown
                    }
                }
            }
        };

        self.statistics.solve_time = started_at.elapsed();

        Ok(result)
    }

    /// The statistics of the last call to [`Solver::satisfy`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Logs the statistics of the last run, followed by the statistics postfix.
    pub fn log_statistics(&self) {
        self.statistics.log();
        log_statistic_postfix();
    }
}
