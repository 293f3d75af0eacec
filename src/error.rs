use thiserror::Error;

use crate::color::VertexId;
use crate::solver::SolverStatus;

/// Errors raised while validating a graph, building the model, solving it or decoding it.
#[derive(Error, Debug)]
pub enum ColoringError {
    /// the adjacency relation has no vertices
    #[error("the graph has no vertices")]
    EmptyGraph,

    /// row `row` of an n×n adjacency relation has the wrong length
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {n}")]
    NonSquareMatrix {
        /// offending row
        row: usize,
        /// its length
        len: usize,
        /// expected length
        n: usize,
    },

    /// an edge references a vertex that does not exist
    #[error("vertex {vertex} out of range (graph has {n} vertices)")]
    VertexOutOfRange {
        /// offending vertex
        vertex: VertexId,
        /// number of vertices
        n: usize,
    },

    /// an edge (v,v)
    #[error("self loop on vertex {0}")]
    SelfLoop(VertexId),

    /// the heuristic bound was computed for another graph
    #[error("bound certificate covers {bound} vertices but the graph has {graph}")]
    DimensionMismatch {
        /// certificate length
        bound: usize,
        /// number of vertices of the graph
        graph: usize,
    },

    /// the solver did not return a usable solution
    #[error("solver finished without a solution (status: {status:?})")]
    SolverStatus {
        /// status reported by the solver
        status: SolverStatus,
    },

    /// solver backend failure
    #[error("solver error: {0}")]
    Solver(String),

    /// the solution vector does not match the model
    #[error("solution has {got} values, expected {expected}")]
    SolutionLength {
        /// (n+1)·k̄
        expected: usize,
        /// actual length
        got: usize,
    },

    /// no assignment column of this vertex is set in the solution
    #[error("vertex {0} has no color in the solution")]
    UnassignedVertex(VertexId),

    /// two adjacent vertices share a color in the decoded solution
    #[error("decoded coloring is invalid: {0:?}")]
    InvalidColoring(crate::color::CheckerResult),

    /// settings could not be parsed
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// settings file could not be read
    #[error("unable to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, ColoringError>;
