/*
Implements the 0/1 integer program of the vertex coloring problem:
 - X(v,k) ∈ {0,1}: vertex v receives color k
 - W(k) ∈ {0,1}: color k is used by at least one vertex

 min ∑_k W(k)
 s.t. ∑_k X(v,k) = 1              ∀ v
      0 <= X(u,k) + X(v,k) <= 1    ∀ (u,v) ∈ E, ∀ k
      0 <= W(k) - X(v,k) <= 1      ∀ v, ∀ k

The number of colors k̄ is the bound given by the greedy heuristic.
*/
use tracing::debug;

use crate::color::{Graph, VertexId};
use crate::error::{ColoringError, Result};
use crate::heuristic::HeuristicBound;

/// column of X(v,k)
pub fn x_index(nb_colors:usize, v:VertexId, k:usize) -> usize { v * nb_colors + k }

/// column of W(k)
pub fn w_index(n:usize, nb_colors:usize, k:usize) -> usize { n * nb_colors + k }

/// number of variables: (n+1)·k̄
pub fn nb_variables(n:usize, nb_colors:usize) -> usize { (n + 1) * nb_colors }

/// number of constraints: n + n·k̄ + m·k̄
pub fn nb_constraints(n:usize, m:usize, nb_colors:usize) -> usize {
    n + n * nb_colors + m * nb_colors
}

/** dense row-major matrix */
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// rows × cols matrix filled with zeros
    pub fn zeros(rows:usize, cols:usize) -> Self {
        Self { rows, cols, data: vec![0. ; rows * cols] }
    }

    /// number of rows
    pub fn rows(&self) -> usize { self.rows }

    /// number of columns
    pub fn cols(&self) -> usize { self.cols }

    /// coefficient at (i,j)
    pub fn get(&self, i:usize, j:usize) -> f64 { self.data[i * self.cols + j] }

    /// sets the coefficient at (i,j)
    pub fn set(&mut self, i:usize, j:usize, value:f64) { self.data[i * self.cols + j] = value; }

    /// row i
    pub fn row(&self, i:usize) -> &[f64] { &self.data[i * self.cols..(i + 1) * self.cols] }

    /// iterates over the rows
    pub fn iter_rows(&self) -> impl Iterator<Item=&[f64]> + '_ {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// raw row-major coefficients
    pub fn as_slice(&self) -> &[f64] { &self.data }
}

/** integer program handed to the solver. */
#[derive(Debug, Clone, PartialEq)]
pub struct IlpModel {
    /// nb vertices
    n: usize,
    /// nb colors (k̄)
    nb_colors: usize,
    /// nb edges
    m: usize,
    /// constraint matrix
    a: Matrix,
    /// lower bound of each row
    lb: Vec<f64>,
    /// upper bound of each row
    ub: Vec<f64>,
    /// objective coefficients
    c: Vec<f64>,
}

impl IlpModel {
    /// constraint matrix A
    pub fn a(&self) -> &Matrix { &self.a }

    /// row lower bounds
    pub fn lb(&self) -> &[f64] { &self.lb }

    /// row upper bounds
    pub fn ub(&self) -> &[f64] { &self.ub }

    /// objective vector C
    pub fn c(&self) -> &[f64] { &self.c }

    /// nb vertices of the graph
    pub fn nb_vertices(&self) -> usize { self.n }

    /// nb colors the model allows (k̄)
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// (n+1)·k̄
    pub fn nb_variables(&self) -> usize { self.c.len() }

    /// n + n·k̄ + m·k̄
    pub fn nb_constraints(&self) -> usize { self.lb.len() }

    /// rows [0, n): one color per vertex
    pub fn assignment_rows(&self) -> std::ops::Range<usize> { 0..self.n }

    /// rows [n, n + m·k̄): adjacent vertices get different colors
    pub fn adjacency_rows(&self) -> std::ops::Range<usize> {
        self.n..self.n + self.m * self.nb_colors
    }

    /// rows [n + m·k̄, end): links X(v,k) to W(k)
    pub fn usage_rows(&self) -> std::ops::Range<usize> {
        self.n + self.m * self.nb_colors..self.nb_constraints()
    }

    /// A·x, for checking a solution against the row bounds
    pub fn row_activities(&self, x:&[f64]) -> Vec<f64> {
        self.a.iter_rows()
            .map(|row| row.iter().zip(x).map(|(a,b)| a*b).sum())
            .collect()
    }

    /// true iff lb <= A·x <= ub (up to tolerance)
    pub fn is_feasible(&self, x:&[f64], tolerance:f64) -> bool {
        x.len() == self.nb_variables() && self.row_activities(x).iter().enumerate()
            .all(|(i,v)| *v >= self.lb[i] - tolerance && *v <= self.ub[i] + tolerance)
    }

    /// C·x
    pub fn objective_value(&self, x:&[f64]) -> f64 {
        self.c.iter().zip(x).map(|(a,b)| a*b).sum()
    }
}

/** fills the integer program for a graph and a heuristic bound.
The builder owns the model: `model()` hands out an independent copy,
`model_ref()` a read-only view without copying.
*/
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    model: IlpModel,
}

impl ModelBuilder {
    /// builds the model (constraint groups in a fixed order: assignment, adjacency, usage).
    ///
    /// # Errors
    /// - `DimensionMismatch` if the bound was computed on a graph with another number of vertices
    pub fn new(graph:&Graph, bound:&HeuristicBound) -> Result<Self> {
        let n = graph.nb_vertices();
        if bound.certificate().len() != n {
            return Err(ColoringError::DimensionMismatch {
                bound: bound.certificate().len(), graph: n
            });
        }
        let nb_colors = bound.nb_colors();
        let m = graph.nb_edges();
        let nb_rows = nb_constraints(n, m, nb_colors);
        let nb_vars = nb_variables(n, nb_colors);
        let mut a = Matrix::zeros(nb_rows, nb_vars);
        let mut lb = vec![0. ; nb_rows];
        let mut ub = vec![1. ; nb_rows];
        let mut c = vec![0. ; nb_vars];
        let mut row = 0;
        // single color assigned per vertex
        for v in 0..n {
            for k in 0..nb_colors {
                a.set(row, x_index(nb_colors, v, k), 1.);
            }
            lb[row] = 1.;
            ub[row] = 1.;
            row += 1;
        }
        // neighbours use different colors
        for &(u,v) in graph.edges() {
            for k in 0..nb_colors {
                a.set(row, x_index(nb_colors, u, k), 1.);
                a.set(row, x_index(nb_colors, v, k), 1.);
                row += 1;
            }
        }
        // W(k) is set as soon as some vertex uses k
        for v in 0..n {
            for k in 0..nb_colors {
                a.set(row, x_index(nb_colors, v, k), -1.);
                a.set(row, w_index(n, nb_colors, k), 1.);
                row += 1;
            }
        }
        debug_assert_eq!(row, nb_rows);
        for k in 0..nb_colors {
            c[w_index(n, nb_colors, k)] = 1.;
        }
        debug!(nb_rows, nb_vars, nb_colors, "coloring model built");
        Ok(Self { model: IlpModel { n, nb_colors, m, a, lb, ub, c } })
    }

    /// independent copy of the model (mutating it never affects the builder)
    pub fn model(&self) -> IlpModel { self.model.clone() }

    /// view on the internal model, without copying
    pub fn model_ref(&self) -> &IlpModel { &self.model }

    /// moves the model out of the builder
    pub fn into_model(self) -> IlpModel { self.model }
}
