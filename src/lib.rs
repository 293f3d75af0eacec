//! Graph Coloring solved as a 0/1 integer program (greedy bound, model, solution decoding)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error type
pub mod error;

/// coloring instance, solutions and checker
pub mod color;

/// greedy coloring giving the number of colors of the model
pub mod heuristic;

/// integer program (variables indexing, constraints, objective)
pub mod model;

/// interface with the integer program solver
pub mod solver;

/// reads a coloring from a solver solution
pub mod decode;

/// solve parameters
pub mod settings;

/// end-to-end solve: bound, model, solver, decoding
pub mod mip;

pub use color::Graph;
pub use error::{ColoringError, Result};
pub use mip::{ColoringResult, GraphColoringMip};
