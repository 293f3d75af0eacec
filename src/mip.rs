use std::time::Duration;

use tracing::{info, warn};

use crate::color::{checker, CheckerResult, Graph};
use crate::decode::{decode_solution, DecodedColoring};
use crate::error::{ColoringError, Result};
use crate::heuristic::{greedy_coloring, HeuristicBound};
use crate::model::{IlpModel, ModelBuilder};
use crate::settings::SolveSettings;
use crate::solver::{IlpSolver, SolverRequest, SolverStatus};

/** result of a solve call */
#[derive(Debug, Clone, PartialEq)]
pub struct ColoringResult {
    /// canonical coloring and chromatic number
    pub coloring: DecodedColoring,
    /// objective value reported by the solver
    pub objective: f64,
    /// solver status (optimal or feasible)
    pub status: SolverStatus,
    /// time spent in the solver
    pub elapsed: Duration,
}

/** graph coloring solved as a 0/1 integer program.
    1. the greedy heuristic gives k̄ colors (and a coloring)
    2. the model is built with k̄ colors
    3. the solver minimizes the number of colors used
    4. its solution is decoded and checked
*/
#[derive(Debug, Clone)]
pub struct GraphColoringMip {
    graph: Graph,
    bound: HeuristicBound,
    builder: ModelBuilder,
}

impl GraphColoringMip {
    /// computes the heuristic bound and builds the model
    pub fn new(graph:Graph) -> Result<Self> {
        let bound = greedy_coloring(&graph);
        let builder = ModelBuilder::new(&graph, &bound)?;
        info!(
            nb_vertices = graph.nb_vertices(),
            nb_edges = graph.nb_edges(),
            heuristic_colors = bound.nb_colors(),
            nb_constraints = builder.model_ref().nb_constraints(),
            nb_variables = builder.model_ref().nb_variables(),
            "coloring model ready"
        );
        Ok(Self { graph, bound, builder })
    }

    /// input graph
    pub fn graph(&self) -> &Graph { &self.graph }

    /// heuristic coloring and its number of colors
    pub fn bound(&self) -> &HeuristicBound { &self.bound }

    /// independent copy of the model
    pub fn model(&self) -> IlpModel { self.builder.model() }

    /// the model, without copying
    pub fn model_ref(&self) -> &IlpModel { self.builder.model_ref() }

    /// calls the solver once and decodes its solution.
    ///
    /// # Errors
    /// - `SolverStatus` if the solver did not find a solution
    /// - backend errors of the solver
    /// - decoding errors, or `InvalidColoring` if the decoded coloring is not proper
    pub fn solve<S:IlpSolver+?Sized>(&self, solver:&S, settings:&SolveSettings) -> Result<ColoringResult> {
        let hint = if settings.warm_start { self.bound.warm_start_hint() } else { Vec::new() };
        let request = SolverRequest {
            model: self.builder.model_ref(),
            maximize: false,
            method: settings.method,
            hint: &hint,
            num_threads: settings.num_threads,
        };
        let response = solver.solve(&request)?;
        info!(
            status = ?response.status,
            objective = response.objective,
            elapsed = ?response.elapsed,
            "MIP optimization finished"
        );
        if !response.status.has_solution() {
            return Err(ColoringError::SolverStatus { status: response.status });
        }
        let coloring = decode_solution(
            &response.solution, self.graph.nb_vertices(), self.bound.nb_colors()
        )?;
        match checker(&self.graph, coloring.colors()) {
            CheckerResult::Ok(_) => {},
            e => {
                warn!("invalid solution (reason: {:?})", e);
                return Err(ColoringError::InvalidColoring(e));
            }
        }
        Ok(ColoringResult {
            coloring,
            objective: response.objective,
            status: response.status,
            elapsed: response.elapsed,
        })
    }
}
