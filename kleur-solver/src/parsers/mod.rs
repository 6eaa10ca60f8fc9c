pub mod dimacs;
