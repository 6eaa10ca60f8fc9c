//! # Kleur
//! Kleur colours the vertices of a graph so that no two adjacent vertices share a colour. The
//! typical instance is a map, where every region is a variable and two regions which share a
//! border are adjacent.
//!
//! Two engines are available:
//! - A complete backtracking search (see [`engine::BacktrackingSearch`]) which either finds a
//!   colouring or proves that none exists. After every tentative assignment a consistency filter
//!   (see [`propagation`]) prunes the domains of the remaining variables, and the branching
//!   heuristics (see [`branching`]) decide the order in which variables and colours are tried.
//! - An incomplete local search (see [`engine::MinConflicts`]) which starts from a random
//!   colouring and repairs conflicts until none are left or the step budget is spent.
//!
//! Both are used through the [`Solver`]:
//! ```rust
//! # use std::num::NonZeroU32;
//! # use kleur_core::graph::ConstraintGraph;
//! # use kleur_core::options::LocalSearchOptions;
//! # use kleur_core::options::SearchStrategy;
//! # use kleur_core::options::SolverOptions;
//! # use kleur_core::results::SatisfactionResult;
//! # use kleur_core::termination::Indefinite;
//! # use kleur_core::SilentObserver;
//! # use kleur_core::Solver;
//! // A cycle of four regions only needs two colours.
//! let cycle = ConstraintGraph::new(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let options = SolverOptions {
//!     num_colours: NonZeroU32::new(2).unwrap(),
//!     ..Default::default()
//! };
//! let mut solver = Solver::with_options(cycle, options);
//!
//! let strategy = SearchStrategy::LocalSearch(LocalSearchOptions { max_steps: 100 });
//! let result = solver
//!     .satisfy(&strategy, &mut Indefinite, &mut SilentObserver)
//!     .unwrap();
//!
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     for (u, v) in solver.graph().edges() {
//!         assert_ne!(solution.colour_of(u), solution.colour_of(v));
//!     }
//! }
//! ```

pub(crate) mod basic_types;
pub mod containers;
pub mod engine;
pub mod graph;

#[doc(hidden)]
pub mod asserts;

pub mod branching;
pub mod propagation;
pub mod statistics;
pub mod termination;

pub use convert_case;
pub use rand;

// A private module with public use, so that the API is exported directly from the crate.
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::Colour;
pub use crate::basic_types::EmptyDomain;
pub use crate::basic_types::PropagationStatus;
pub use crate::basic_types::Random;
pub use crate::basic_types::Solution;
pub use crate::basic_types::SolverError;
pub use crate::basic_types::VariableId;
