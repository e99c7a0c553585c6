//! Graph data structures
//!
//! This module contains the two graph representations consumed by the engines:
//! - `MatrixGraph`: square weight matrix, used by the MST engine
//! - `AdjacencyList`: arena of arc records chained per vertex, used by traversal
//!
//! Vertices are integer indices `0..vexnum`; a parallel label array maps each
//! index to its display name.

mod adjacency;
mod matrix;

use serde::Serialize;

pub use adjacency::{AdjacencyList, ArcNode, Arcs};
pub use matrix::MatrixGraph;

/// Weight carried by an arc.
pub type Weight = i32;

/// Sentinel weight meaning "no arc" in weighted matrices.
pub const INFINITY: Weight = 32767;

/// Edge triple `(from, to, weight)` as supplied to the graph constructors.
pub type EdgeTriple = (usize, usize, Weight);

/// Directed/undirected × weighted/unweighted classification of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GraphKind {
    /// Directed graph, unit weights (DG)
    DirectedUnweighted,
    /// Directed network (DN)
    DirectedWeighted,
    /// Undirected graph, unit weights (UDG)
    UndirectedUnweighted,
    /// Undirected network (UDN)
    UndirectedWeighted,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(
            self,
            GraphKind::DirectedUnweighted | GraphKind::DirectedWeighted
        )
    }

    pub fn is_weighted(&self) -> bool {
        matches!(
            self,
            GraphKind::DirectedWeighted | GraphKind::UndirectedWeighted
        )
    }

    /// Matrix cell value meaning "no arc" for this kind.
    pub fn absent(&self) -> Weight {
        if self.is_weighted() {
            INFINITY
        } else {
            0
        }
    }

    /// Weight actually stored for an input weight.
    ///
    /// Unweighted kinds force every arc to weight 1.
    pub fn effective_weight(&self, weight: Weight) -> Weight {
        if self.is_weighted() {
            weight
        } else {
            1
        }
    }
}

/// A weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// Degree of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VertexDegree {
    Directed { in_degree: usize, out_degree: usize },
    Undirected { degree: usize },
}

impl VertexDegree {
    /// Total degree (in + out for directed kinds).
    pub fn total(&self) -> usize {
        match self {
            VertexDegree::Directed {
                in_degree,
                out_degree,
            } => in_degree + out_degree,
            VertexDegree::Undirected { degree } => *degree,
        }
    }
}

/// Collect labels into owned strings.
pub(crate) fn owned_labels<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Vec<String> {
    labels.into_iter().map(Into::into).collect()
}

/// Check every edge endpoint against the vertex count.
pub(crate) fn validate_edges(
    vexnum: usize,
    edges: &[EdgeTriple],
) -> Result<(), crate::errors::GraphError> {
    for &(from, to, _) in edges {
        for index in [from, to] {
            if index >= vexnum {
                return Err(crate::errors::GraphError::out_of_range(index, vexnum));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_absent_sentinel() {
        assert_eq!(GraphKind::DirectedUnweighted.absent(), 0);
        assert_eq!(GraphKind::UndirectedUnweighted.absent(), 0);
        assert_eq!(GraphKind::DirectedWeighted.absent(), INFINITY);
        assert_eq!(GraphKind::UndirectedWeighted.absent(), INFINITY);
    }

    #[test]
    fn test_unweighted_forces_unit_weight() {
        assert_eq!(GraphKind::DirectedUnweighted.effective_weight(9), 1);
        assert_eq!(GraphKind::UndirectedWeighted.effective_weight(9), 9);
    }

    #[test]
    fn test_validate_edges() {
        assert!(validate_edges(3, &[(0, 1, 1), (2, 0, 1)]).is_ok());
        assert_eq!(
            validate_edges(3, &[(0, 3, 1)]),
            Err(crate::errors::GraphError::VertexOutOfRange {
                index: 3,
                vexnum: 3
            })
        );
    }
}
