//! # Kleur solver
//! The command line front end of [`kleur_core`], which is re-exported as [`core`], together with
//! the parser for graph colouring instances in the DIMACS graph format ([`parsers::dimacs`]).

pub use kleur_core as core;

pub mod parsers;
