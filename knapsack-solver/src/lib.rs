mod bound;
mod engine;
mod reconstruct;
pub mod sack_set;
mod solver;
mod unbound;

pub use sack_set::SackSet;
pub use solver::{run, solve, solve_with_placement, Outcome, SolveStats};

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
