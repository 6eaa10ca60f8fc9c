mod file_format;
mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::Write;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::Parser;
use clap::ValueEnum;
use file_format::FileFormat;
use kleur_solver::core::convert_case::Case;
use kleur_solver::core::engine::Assignment;
use kleur_solver::core::options::BacktrackingOptions;
use kleur_solver::core::options::LocalSearchOptions;
use kleur_solver::core::options::PropagationMode;
use kleur_solver::core::options::SearchStrategy;
use kleur_solver::core::options::SolverOptions;
use kleur_solver::core::rand::rngs::SmallRng;
use kleur_solver::core::rand::SeedableRng;
use kleur_solver::core::results::SatisfactionResult;
use kleur_solver::core::statistics::configure_statistic_logging;
use kleur_solver::core::termination::Combinator;
use kleur_solver::core::termination::TimeBudget;
use kleur_solver::core::AssignmentObserver;
use kleur_solver::core::SilentObserver;
use kleur_solver::core::Solution;
use kleur_solver::core::Solver;
use kleur_solver::parsers::dimacs::parse_graph;
use log::error;
use log::info;
use log::trace;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::KleurError;
use result::KleurResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to colour, given in the DIMACS graph format ('*.col').
    instance_path: PathBuf,

    /// How the colouring is searched for.
    ///
    /// The first three modes are backtracking search with the given consistency filter, the last
    /// one is min-conflicts local search.
    #[arg(long, value_enum)]
    mode: Mode,

    /// Whether backtracking branches on the most constrained variable (ties broken by the number
    /// of unassigned neighbours) instead of the lowest-numbered one.
    ///
    /// Required unless the mode is 'local-search'.
    ///
    /// Possible values: bool
    #[arg(long, value_parser = BoolishValueParser::new(), verbatim_doc_comment)]
    variable_ordering: Option<bool>,

    /// Whether backtracking tries the least constraining colour first instead of following the
    /// domain order.
    ///
    /// Required unless the mode is 'local-search'.
    ///
    /// Possible values: bool
    #[arg(long, value_parser = BoolishValueParser::new(), verbatim_doc_comment)]
    value_ordering: Option<bool>,

    /// The number of available colours.
    ///
    /// Possible values: non-zero u32
    #[arg(long, default_value_t = NonZeroU32::MIN.saturating_add(3), verbatim_doc_comment)]
    colours: NonZeroU32,

    /// The maximum number of repairs performed by local search before giving up.
    ///
    /// Possible values: usize
    #[arg(long, default_value_t = 100, verbatim_doc_comment)]
    max_steps: usize,

    /// The seed of the random generator used by local search.
    ///
    /// Possible values: u64
    #[arg(long, default_value_t = 42, verbatim_doc_comment)]
    random_seed: u64,

    /// The time budget for the search, in milliseconds.
    #[arg(long = "time-limit")]
    time_limit: Option<u64>,

    /// Enables log message output from the solver.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,

    /// Logs every intermediate assignment of the search.
    #[arg(long = "trace-assignments")]
    trace_assignments: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Backtracking which only checks a new colour against the assigned neighbours.
    #[value(name = "none", alias = "n")]
    None,
    /// Backtracking with forward checking.
    #[value(name = "forward-check", alias = "fc")]
    ForwardCheck,
    /// Backtracking which maintains arc consistency.
    #[value(name = "arc-consistency", alias = "ac")]
    ArcConsistency,
    /// Min-conflicts local search (iterative improvement).
    #[value(name = "local-search", alias = "ii")]
    LocalSearch,
}

/// Logs every assignment it is notified of at trace level.
#[derive(Clone, Copy, Debug)]
struct AssignmentTracer;

impl AssignmentObserver for AssignmentTracer {
    fn on_assignment_changed(&mut self, assignment: &Assignment) {
        trace!("assignment: {assignment}");
    }
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    trace_assignments: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c", None, Some(Case::Camel), None);
    }

    let level_filter = if trace_assignments {
        LevelFilter::Trace
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn configure_logging_unknown() -> std::io::Result<()> {
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(LevelFilter::Trace)
        .target(env_logger::Target::Stdout)
        .init();
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> KleurResult<()> {
    let args = Args::parse();

    let Some(file_format) = FileFormat::of_instance(&args.instance_path) else {
        configure_logging_unknown()?;
        return Err(KleurError::invalid_instance(args.instance_path.display()));
    };

    configure_logging(args.verbose, args.log_statistics, args.trace_assignments)?;

    if kleur_solver::core::asserts::KLEUR_ASSERT_LEVEL_DEFINITION
        >= kleur_solver::core::asserts::KLEUR_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Kleur assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            kleur_solver::core::asserts::KLEUR_ASSERT_LEVEL_DEFINITION
        );
    }

    let strategy = search_strategy(&args)?;

    let graph = match file_format {
        FileFormat::DimacsGraph => parse_graph(File::open(&args.instance_path)?)?,
    };
    info!("Instance: {}", graph.summary());

    let mut solver = Solver::with_options(
        graph,
        SolverOptions {
            num_colours: args.colours,
            random_generator: SmallRng::seed_from_u64(args.random_seed),
        },
    );

    let mut termination = Combinator::new(
        OsSignal::install(),
        args.time_limit
            .map(|milliseconds| TimeBudget::starting_now(Duration::from_millis(milliseconds))),
    );

    let result = if args.trace_assignments {
        solver.satisfy(&strategy, &mut termination, &mut AssignmentTracer)?
    } else {
        solver.satisfy(&strategy, &mut termination, &mut SilentObserver)?
    };

    match result {
        SatisfactionResult::Satisfiable(solution) => {
            println!("s SATISFIABLE");
            println!("v {}", stringify_solution(&solution));
        }
        SatisfactionResult::Unsatisfiable => println!("s UNSATISFIABLE"),
        SatisfactionResult::Unknown => println!("s UNKNOWN"),
    }

    let statistics = solver.statistics();
    match strategy {
        SearchStrategy::Backtracking(_) => println!("c backtracks: {}", statistics.num_backtracks),
        SearchStrategy::LocalSearch(_) => {
            println!("c steps: {}", statistics.num_local_search_steps)
        }
    }

    if args.log_statistics {
        solver.log_statistics();
    }

    Ok(())
}

/// Maps the mode and the ordering flags onto the search strategy of the solver.
fn search_strategy(args: &Args) -> KleurResult<SearchStrategy> {
    let propagation = match args.mode {
        Mode::LocalSearch => {
            if args.variable_ordering.is_some() || args.value_ordering.is_some() {
                warn!("The ordering flags are ignored by local search");
            }

            return Ok(SearchStrategy::LocalSearch(LocalSearchOptions {
                max_steps: args.max_steps,
            }));
        }
        Mode::None => PropagationMode::None,
        Mode::ForwardCheck => PropagationMode::ForwardChecking,
        Mode::ArcConsistency => PropagationMode::ArcConsistency,
    };

    let variable_ordering = args
        .variable_ordering
        .ok_or(KleurError::MissingOrderingFlag("--variable-ordering"))?;
    let value_ordering = args
        .value_ordering
        .ok_or(KleurError::MissingOrderingFlag("--value-ordering"))?;

    Ok(SearchStrategy::Backtracking(BacktrackingOptions {
        propagation,
        variable_ordering,
        value_ordering,
    }))
}

fn stringify_solution(solution: &Solution) -> String {
    solution
        .colours()
        .map(|colour| colour.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
