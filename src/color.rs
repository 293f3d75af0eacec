use bit_set::BitSet;

use crate::error::{ColoringError, Result};

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** models a Graph Coloring instance.

Only the strict upper triangle of the adjacency relation is authoritative:
the graph is built from it and stored symmetrically.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// edges of the graph (u < v, row-major order of the upper triangle)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}


impl Graph {

    /// builds a graph from an n×n adjacency relation. A non-default value (nonzero)
    /// in row u, column v > u denotes the edge {u,v}. The diagonal and the lower triangle
    /// are never read.
    ///
    /// # Errors
    /// - `EmptyGraph` if the relation has no rows
    /// - `NonSquareMatrix` if some row does not have n entries
    pub fn from_adjacency_matrix<T:Default+PartialEq>(matrix:&[Vec<T>]) -> Result<Self> {
        let n = matrix.len();
        if n == 0 { return Err(ColoringError::EmptyGraph); }
        if let Some((row, r)) = matrix.iter().enumerate().find(|(_,r)| r.len() != n) {
            return Err(ColoringError::NonSquareMatrix { row, len:r.len(), n });
        }
        let zero = T::default();
        let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
        for u in 0..n {
            for v in u+1..n {
                if matrix[u][v] != zero {
                    adj_matrix[u].insert(v);
                    adj_matrix[v].insert(u);
                }
            }
        }
        Ok(Self::from_bitsets(n, adj_matrix))
    }

    /// builds a graph with n vertices from an edge list. Edges may be given in any
    /// orientation, duplicates are merged.
    ///
    /// # Errors
    /// - `EmptyGraph` if n = 0
    /// - `VertexOutOfRange` if an endpoint is not in [0,n)
    /// - `SelfLoop` for an edge (v,v)
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self> {
        if n == 0 { return Err(ColoringError::EmptyGraph); }
        let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
        for &(a,b) in edges {
            for vertex in [a,b] {
                if vertex >= n { return Err(ColoringError::VertexOutOfRange { vertex, n }); }
            }
            if a == b { return Err(ColoringError::SelfLoop(a)); }
            adj_matrix[a].insert(b);
            adj_matrix[b].insert(a);
        }
        Ok(Self::from_bitsets(n, adj_matrix))
    }

    /// scans the upper triangle once to build the edge list
    fn from_bitsets(n:usize, adj_matrix:Vec<BitSet>) -> Self {
        let mut edges = Vec::new();
        for (u,row) in adj_matrix.iter().enumerate() {
            for v in row.iter().filter(|v| *v > u) {
                edges.push((u,v));
            }
        }
        Self { n, edges, adj_matrix }
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// edge list (u < v)
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// neighbors of u, in increasing order
    ///
    /// # Panics
    /// if u >= n
    pub fn neighbors(&self, u:VertexId) -> impl Iterator<Item=VertexId> + '_ {
        self.adj_matrix[u].iter()
    }

    /// number of neighbors of u
    ///
    /// # Panics
    /// if u >= n
    pub fn degree(&self, u:VertexId) -> usize { self.adj_matrix[u].len() }

    /// returns if u and v are adjacent. O(1)
    ///
    /// # Panics
    /// if u >= n
    pub fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }
}


/** result of the coloring checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is proper and uses this number of distinct colors
    Ok(usize),
    /// the coloring does not assign one color per vertex
    WrongLength {
        /// number of vertices
        expected: usize,
        /// length of the coloring
        got: usize,
    },
    /// two adjacent vertices share a color
    Conflict(VertexId, VertexId),
}

/**
checks a coloring given as colors[v]: color of vertex v.
returns the number of distinct colors if it is proper.
*/
pub fn checker(graph:&Graph, colors:&[usize]) -> CheckerResult {
    if colors.len() != graph.nb_vertices() {
        return CheckerResult::WrongLength { expected:graph.nb_vertices(), got:colors.len() };
    }
    if let Some(&(u,v)) = graph.edges().iter().find(|(u,v)| colors[*u] == colors[*v]) {
        return CheckerResult::Conflict(u,v);
    }
    let used:BitSet = colors.iter().copied().collect();
    CheckerResult::Ok(used.len())
}

/// transforms colors[v] (color ids in [0,nb_colors)) into the partition representation
pub fn colors_to_partition(colors:&[usize], nb_colors:usize) -> Solution {
    let mut res = vec![vec![] ; nb_colors];
    for (v,c) in colors.iter().enumerate() {
        res[*c].push(v);
    }
    res
}
