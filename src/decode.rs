use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::color::{Solution, colors_to_partition};
use crate::error::{ColoringError, Result};
use crate::model::{nb_variables, x_index};

/** coloring read from a solver solution, with canonical color ids. */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedColoring {
    /// colors[v]: canonical color of vertex v, in [0, nb_colors)
    colors: Vec<usize>,
    /// number of distinct colors (achieved chromatic number)
    nb_colors: usize,
}

impl DecodedColoring {
    /// colors[v]: canonical color of vertex v
    pub fn colors(&self) -> &[usize] { &self.colors }

    /// number of colors used
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// coloring in the partition representation
    pub fn to_partition(&self) -> Solution {
        colors_to_partition(&self.colors, self.nb_colors)
    }
}

/** reads the coloring from a solution vector of length (n+1)·k̄.

For each vertex, the raw color is the column of X(v,·) holding a nonzero value.
The test is exact (`!= 0`): on a 0/1 solution the column is unique. On a fractional
(LP relaxation) vector several columns may be nonzero; the last one is kept and no
rounding is attempted, so the result may not be a proper coloring.

Raw colors are then relabeled in first-seen vertex order (see `canonicalize`).
Labels therefore depend on the solution the solver picked among ties; the count does not.

# Errors
 - `SolutionLength` if the vector does not have (n+1)·k̄ values
 - `UnassignedVertex` if no column of some vertex is nonzero
*/
pub fn decode_solution(solution:&[f64], n:usize, nb_colors:usize) -> Result<DecodedColoring> {
    let expected = nb_variables(n, nb_colors);
    if solution.len() != expected {
        return Err(ColoringError::SolutionLength { expected, got: solution.len() });
    }
    let mut raw:Vec<usize> = Vec::with_capacity(n);
    for v in 0..n {
        let assigned:Vec<usize> = (0..nb_colors)
            .filter(|k| solution[x_index(nb_colors, v, *k)] != 0.)
            .collect();
        match assigned.last() {
            None => return Err(ColoringError::UnassignedVertex(v)),
            Some(k) => {
                if assigned.len() > 1 {
                    warn!(vertex = v, ?assigned, "several colors set for a vertex (non-binary solution?)");
                }
                raw.push(*k);
            }
        }
    }
    let (colors, nb_colors) = canonicalize(&raw);
    Ok(DecodedColoring { colors, nb_colors })
}

/** relabels colors to [0,m): the first time a color is met (in vertex order)
it receives the next unused id. Returns the relabeled colors and m. */
pub fn canonicalize(raw:&[usize]) -> (Vec<usize>, usize) {
    let mut relabel:HashMap<usize,usize> = HashMap::new();
    let colors:Vec<usize> = raw.iter().map(|c| {
        let next = relabel.len();
        *relabel.entry(*c).or_insert(next)
    }).collect();
    (colors, relabel.len())
}
