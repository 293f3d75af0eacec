use bit_set::BitSet;
use serde::Serialize;
use tracing::debug;

use crate::color::{Graph, Solution, colors_to_partition};
use crate::model::{nb_variables, w_index, x_index};

/** result of the greedy heuristic: a proper coloring (certificate) and the number of
colors it uses (k̄). k̄ is an upper bound of the chromatic number and sizes the model.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeuristicBound {
    /// certificate[v]: color of vertex v
    certificate: Vec<usize>,
    /// 1 + max color used
    nb_colors: usize,
}

impl HeuristicBound {
    /// certificate[v]: color assigned to vertex v
    pub fn certificate(&self) -> &[usize] { &self.certificate }

    /// heuristic color-count bound (k̄)
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /** encodes the certificate as a 0/1 vector over the model variables:
    X(v,certificate[v]) = 1 and W(k) = 1 for every color used. */
    pub fn warm_start_hint(&self) -> Vec<f64> {
        let n = self.certificate.len();
        let mut hint = vec![0. ; nb_variables(n, self.nb_colors)];
        for (v,k) in self.certificate.iter().enumerate() {
            hint[x_index(self.nb_colors, v, *k)] = 1.;
            hint[w_index(n, self.nb_colors, *k)] = 1.;
        }
        hint
    }

    /// certificate in the partition representation
    pub fn to_partition(&self) -> Solution {
        colors_to_partition(&self.certificate, self.nb_colors)
    }
}

/** greedy coloring in index order.
    1. take the next vertex u
    2. mark the colors of its already colored neighbors as forbidden
    3. assign u the smallest color that is not forbidden

Not optimal, but always proper, and runs in O(n + m·Δ) time.
*/
pub fn greedy_coloring(graph:&Graph) -> HeuristicBound {
    let n = graph.nb_vertices();
    let mut colors:Vec<Option<usize>> = vec![None ; n];
    let mut last_color:usize = 0;
    for u in 0..n {
        let forbidden:BitSet = graph.neighbors(u)
            .filter_map(|v| colors[v])
            .collect();
        let mut color:usize = 0;
        while forbidden.contains(color) { color += 1; }
        colors[u] = Some(color);
        last_color = last_color.max(color);
    }
    let certificate:Vec<usize> = colors.into_iter().flatten().collect();
    debug!(nb_vertices = n, nb_colors = last_color + 1, "greedy heuristic bound computed");
    HeuristicBound { certificate, nb_colors: last_color + 1 }
}
