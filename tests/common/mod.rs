//! test solvers

use std::time::Instant;

use dogs_ilp_color::Result;
use dogs_ilp_color::color::Graph;
use dogs_ilp_color::model::{IlpModel, nb_variables, w_index, x_index};
use dogs_ilp_color::solver::{IlpSolver, SolverRequest, SolverResponse, SolverStatus};

/** enumerates every color assignment X (W set to the colors used) and keeps the
feasible one with the smallest objective. Only usable on tiny models. */
#[derive(Debug, Default)]
pub struct BruteForceSolver;

/// encodes colors[v] as a 0/1 vector of the model variables
pub fn encode(model:&IlpModel, colors:&[usize]) -> Vec<f64> {
    let (n, k) = (model.nb_vertices(), model.nb_colors());
    let mut x = vec![0. ; nb_variables(n, k)];
    for (v,c) in colors.iter().enumerate() {
        x[x_index(k, v, *c)] = 1.;
        x[w_index(n, k, *c)] = 1.;
    }
    x
}

impl IlpSolver for BruteForceSolver {
    fn solve(&self, request:&SolverRequest) -> Result<SolverResponse> {
        let t_start = Instant::now();
        let model = request.model;
        let (n, k) = (model.nb_vertices(), model.nb_colors());
        let mut colors = vec![0 ; n];
        let mut best:Option<(f64, Vec<f64>)> = None;
        loop {
            let x = encode(model, &colors);
            let obj = model.objective_value(&x);
            let improves = best.as_ref().map_or(true, |(b,_)| obj < *b);
            if improves && model.is_feasible(&x, 1e-9) {
                best = Some((obj, x));
            }
            // next assignment (base k counter)
            let mut i = 0;
            while i < n && colors[i] == k - 1 { colors[i] = 0; i += 1; }
            if i == n { break; }
            colors[i] += 1;
        }
        let elapsed = t_start.elapsed();
        Ok(match best {
            Some((objective, solution)) => SolverResponse {
                objective, solution, status: SolverStatus::Optimal, elapsed
            },
            None => SolverResponse {
                objective: f64::NAN, solution: vec![], status: SolverStatus::Infeasible, elapsed
            },
        })
    }
}

/// smallest k such that the graph admits a proper k-coloring (exhaustive)
pub fn chromatic_number(graph:&Graph) -> usize {
    let n = graph.nb_vertices();
    (1..=n).find(|k| {
        let mut colors = vec![0 ; n];
        loop {
            if graph.edges().iter().all(|(u,v)| colors[*u] != colors[*v]) { return true; }
            let mut i = 0;
            while i < n && colors[i] == k - 1 { colors[i] = 0; i += 1; }
            if i == n { return false; }
            colors[i] += 1;
        }
    }).unwrap_or(n)
}

/// complete graph on n vertices
pub fn complete(n:usize) -> Graph {
    let edges:Vec<(usize,usize)> = (0..n).flat_map(|u| (u+1..n).map(move |v| (u,v))).collect();
    Graph::from_edges(n, &edges).unwrap()
}
