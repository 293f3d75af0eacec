//! Boundary with the external integer program solver.

use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::model::IlpModel;

/// good_lp adapter (microlp backend)
#[cfg(feature = "good_lp")]
pub mod good_lp_solver;

/// method the solver should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverMethod {
    /// boolean optimization (pseudo-boolean local search + propagation)
    Bop,
    /// CP-SAT
    Sat,
    /// COIN-OR branch and cut
    Cbc,
    /// SCIP
    Scip,
}

impl Default for SolverMethod {
    fn default() -> Self { SolverMethod::Bop }
}

/// status returned by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// optimal solution found
    Optimal,
    /// feasible solution found, optimality not proven
    Feasible,
    /// the problem is infeasible
    Infeasible,
    /// the problem is unbounded
    Unbounded,
    /// the solver failed
    Error,
}

impl SolverStatus {
    /// true if the response carries a solution that can be decoded
    pub fn has_solution(&self) -> bool {
        matches!(self, SolverStatus::Optimal | SolverStatus::Feasible)
    }
}

/** everything the solver receives: objective C, matrix A, row bounds lb/ub,
direction, method, warm-start hint (empty = none) and a thread-count hint. */
#[derive(Debug, Clone, Copy)]
pub struct SolverRequest<'a> {
    /// C, A, lb, ub
    pub model: &'a IlpModel,
    /// maximize instead of minimize
    pub maximize: bool,
    /// solver method
    pub method: SolverMethod,
    /// initial candidate solution (same length as the variables, or empty)
    pub hint: &'a [f64],
    /// number of threads the solver may use
    pub num_threads: usize,
}

/// what the solver returns
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResponse {
    /// objective value
    pub objective: f64,
    /// value of each variable (expected binary)
    pub solution: Vec<f64>,
    /// solver status
    pub status: SolverStatus,
    /// time spent solving
    pub elapsed: Duration,
}

/** synchronous integer program solver. Blocks until a response is available. */
pub trait IlpSolver {
    /// solves the request.
    ///
    /// # Errors
    /// backend failures. An infeasible problem is reported through the response status.
    fn solve(&self, request:&SolverRequest) -> Result<SolverResponse>;
}
