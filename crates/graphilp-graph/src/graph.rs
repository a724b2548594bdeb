use std::collections::BTreeSet;

use crate::error::GraphError;

/// Undirected simple graph on vertices `0..vertex_count`.
///
/// Edges are stored once as `(u, v)` with `u < v`. Storage grows with the
/// edge set only, so a large declared vertex count costs nothing up front.
/// Vertex counts are capped at `u32::MAX`, the largest a model can index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: BTreeSet<(usize, usize)>,
}

impl Graph {
    /// Build a graph from 0-based pairs in either orientation.
    ///
    /// Repeated pairs collapse into one edge. A vertex count above
    /// `u32::MAX`, endpoints outside `0..vertex_count` and self-loops are
    /// rejected.
    pub fn new<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        check_vertex_count(vertex_count, None)?;
        let mut normalized = BTreeSet::new();
        for (u, v) in edges {
            if u >= vertex_count || v >= vertex_count {
                return Err(GraphError::InvalidArgument {
                    line: None,
                    reason: format!(
                        "edge ({u}, {v}) has an endpoint outside 0..{vertex_count}"
                    ),
                });
            }
            if u == v {
                return Err(GraphError::InvalidArgument {
                    line: None,
                    reason: format!("self-loop on vertex {u}"),
                });
            }
            normalized.insert((u.min(v), u.max(v)));
        }
        Ok(Self::from_normalized(vertex_count, normalized))
    }

    /// Caller guarantees a checked vertex count and `u < v < vertex_count`.
    pub(crate) fn from_normalized(vertex_count: usize, edges: BTreeSet<(usize, usize)>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Graph with `vertex_count` vertices and no edges.
    pub fn empty(vertex_count: u32) -> Self {
        Self::from_normalized(vertex_count as usize, BTreeSet::new())
    }

    /// Complete graph on `vertex_count` vertices.
    pub fn complete(vertex_count: u32) -> Self {
        let n = vertex_count as usize;
        let edges = (0..n)
            .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
            .collect();
        Self::from_normalized(n, edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as `(u, v)` with `u < v`, ascending.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Whether `u` and `v` are joined by an edge. Always false for `u == v`.
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.edges.contains(&(u.min(v), u.max(v)))
    }

    /// Pairs `(i, j)`, `i < j`, that are not edges, ascending.
    pub fn non_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count).flat_map(move |i| {
            (i + 1..self.vertex_count)
                .filter(move |&j| !self.is_adjacent(i, j))
                .map(move |j| (i, j))
        })
    }

    /// Whether `vertices` are pairwise adjacent. The empty set and singletons qualify.
    pub fn is_clique(&self, vertices: &[usize]) -> bool {
        vertices.iter().enumerate().all(|(pos, &u)| {
            u < self.vertex_count && vertices[pos + 1..].iter().all(|&v| self.is_adjacent(u, v))
        })
    }

    /// Whether `colors[v]` differs across every edge.
    pub fn is_proper_coloring(&self, colors: &[usize]) -> bool {
        colors.len() == self.vertex_count && self.edges().all(|(u, v)| colors[u] != colors[v])
    }
}

/// Reject vertex counts a model cannot give one column per vertex.
pub(crate) fn check_vertex_count(vertex_count: usize, line: Option<usize>) -> Result<(), GraphError> {
    if u32::try_from(vertex_count).is_ok() {
        return Ok(());
    }
    Err(GraphError::InvalidArgument {
        line,
        reason: format!(
            "vertex count {vertex_count} exceeds the supported maximum {}",
            u32::MAX
        ),
    })
}
