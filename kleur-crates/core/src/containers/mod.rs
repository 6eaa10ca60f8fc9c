//! Containers which are indexed by the identifiers used throughout the solver.

mod keyed_vec;

pub use keyed_vec::KeyedVec;
pub use keyed_vec::StorageKey;
