use std::time::Instant;

use ::good_lp::{constraint, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable, variable};
use ::good_lp::solvers::microlp::microlp;
use tracing::{debug, warn};

use crate::error::{ColoringError, Result};
use super::{IlpSolver, SolverRequest, SolverResponse, SolverStatus};

/** solves the model with good_lp, using the pure-rust microlp backend.
Every variable is binary. microlp supports neither warm starts nor threads:
both hints are ignored.
*/
#[derive(Debug, Default, Clone, Copy)]
pub struct GoodLpSolver;

impl IlpSolver for GoodLpSolver {
    fn solve(&self, request:&SolverRequest) -> Result<SolverResponse> {
        let model = request.model;
        if !request.hint.is_empty() {
            debug!("microlp ignores the warm-start hint");
        }
        debug!(method = ?request.method, num_threads = request.num_threads, "solving using MIP (microlp)");
        let t_start = Instant::now();
        let mut problem_vars = ProblemVariables::new();
        let x:Vec<Variable> = (0..model.nb_variables())
            .map(|_| problem_vars.add(variable().binary()))
            .collect();
        let mut obj_expr = Expression::with_capacity(x.len());
        for (ci,xi) in model.c().iter().zip(x.iter()) {
            if *ci != 0. { obj_expr.add_mul(*ci, *xi); }
        }
        let mut problem = if request.maximize {
            problem_vars.maximise(obj_expr).using(microlp)
        } else {
            problem_vars.minimise(obj_expr).using(microlp)
        };
        for (i,row) in model.a().iter_rows().enumerate() {
            let mut cst = Expression::with_capacity(2);
            for (j,aij) in row.iter().enumerate().filter(|(_,aij)| **aij != 0.) {
                cst.add_mul(*aij, x[j]);
            }
            let (lb,ub) = (model.lb()[i], model.ub()[i]);
            if lb == ub {
                problem.add_constraint(constraint::eq(cst, lb));
            } else {
                problem.add_constraint(constraint::geq(cst.clone(), lb));
                problem.add_constraint(constraint::leq(cst, ub));
            }
        }
        let sol = problem.solve();
        let elapsed = t_start.elapsed();
        match sol {
            Ok(sol) => {
                let solution:Vec<f64> = x.iter().map(|xi| sol.value(*xi)).collect();
                Ok(SolverResponse {
                    objective: model.objective_value(&solution),
                    solution,
                    status: SolverStatus::Optimal,
                    elapsed,
                })
            },
            Err(ResolutionError::Infeasible) => Ok(Self::empty_response(SolverStatus::Infeasible, elapsed)),
            Err(ResolutionError::Unbounded) => Ok(Self::empty_response(SolverStatus::Unbounded, elapsed)),
            Err(e) => {
                warn!("microlp failed: {}", e);
                Err(ColoringError::Solver(e.to_string()))
            }
        }
    }
}

impl GoodLpSolver {
    fn empty_response(status:SolverStatus, elapsed:std::time::Duration) -> SolverResponse {
        SolverResponse { objective: f64::NAN, solution: Vec::new(), status, elapsed }
    }
}
