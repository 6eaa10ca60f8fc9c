#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::fs::File;
use std::num::NonZeroU32;

use kleur_solver::core::options::BacktrackingOptions;
use kleur_solver::core::options::LocalSearchOptions;
use kleur_solver::core::options::PropagationMode;
use kleur_solver::core::options::SearchStrategy;
use kleur_solver::core::options::SolverOptions;
use kleur_solver::core::results::SatisfactionResult;
use kleur_solver::core::termination::Indefinite;
use kleur_solver::core::SilentObserver;
use kleur_solver::core::Solver;
use kleur_solver::parsers::dimacs::parse_graph;

mod helpers;

fn solver_for(instance_name: &str, num_colours: u32) -> Solver {
    let file = File::open(helpers::instance(instance_name)).expect("instance exists");
    let graph = parse_graph(file).expect("valid instance");

    Solver::with_options(
        graph,
        SolverOptions {
            num_colours: NonZeroU32::new(num_colours).expect("non-zero"),
            ..Default::default()
        },
    )
}

fn all_backtracking_strategies() -> impl Iterator<Item = SearchStrategy> {
    [
        PropagationMode::None,
        PropagationMode::ForwardChecking,
        PropagationMode::ArcConsistency,
    ]
    .into_iter()
    .flat_map(|propagation| {
        [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(move |(variable_ordering, value_ordering)| {
                SearchStrategy::Backtracking(BacktrackingOptions {
                    propagation,
                    variable_ordering,
                    value_ordering,
                })
            })
    })
}

#[test]
fn all_backtracking_strategies_agree_on_satisfiability() {
    for (instance_name, num_colours, satisfiable) in [
        ("australia.col", 2, false),
        ("australia.col", 3, true),
        ("wheel.col", 3, false),
        ("wheel.col", 4, true),
        ("four_cycle.col", 2, true),
    ] {
        for strategy in all_backtracking_strategies() {
            let mut solver = solver_for(instance_name, num_colours);
            let result = solver
                .satisfy(&strategy, &mut Indefinite, &mut SilentObserver)
                .expect("no fault");

            match result {
                SatisfactionResult::Satisfiable(solution) => {
                    assert!(satisfiable, "{instance_name} {strategy:?}");
                    for (u, v) in solver.graph().edges() {
                        assert_ne!(solution.colour_of(u), solution.colour_of(v));
                    }
                }
                SatisfactionResult::Unsatisfiable => {
                    assert!(!satisfiable, "{instance_name} {strategy:?}")
                }
                SatisfactionResult::Unknown => panic!("backtracking without a budget is complete"),
            }
        }
    }
}

#[test]
fn propagation_reduces_backtracking() {
    let backtracks = |propagation| {
        let mut solver = solver_for("wheel.col", 3);
        let strategy = SearchStrategy::Backtracking(BacktrackingOptions {
            propagation,
            variable_ordering: false,
            value_ordering: false,
        });
        let _ = solver
            .satisfy(&strategy, &mut Indefinite, &mut SilentObserver)
            .expect("no fault");
        solver.statistics().num_backtracks
    };

    let none = backtracks(PropagationMode::None);
    let forward_checking = backtracks(PropagationMode::ForwardChecking);
    let arc_consistency = backtracks(PropagationMode::ArcConsistency);

    assert!(forward_checking <= none);
    assert!(arc_consistency <= forward_checking);
}

#[test]
fn local_search_is_reproducible_for_a_seed() {
    let run = || {
        let mut solver = solver_for("australia.col", 3);
        let result = solver
            .satisfy(
                &SearchStrategy::LocalSearch(LocalSearchOptions { max_steps: 500 }),
                &mut Indefinite,
                &mut SilentObserver,
            )
            .expect("no fault");
        (result, solver.statistics().num_local_search_steps)
    };

    assert_eq!(run(), run());
}
