//! Adjacency matrix representation
//!
//! `arcs[i][j]` holds the weight of arc `i -> j`, or the kind's "absent"
//! value (`0` for unweighted kinds, `INFINITY` for weighted kinds).
//! Undirected kinds keep the matrix symmetric.

use super::{
    owned_labels, validate_edges, AdjacencyList, EdgeTriple, GraphKind, VertexDegree, Weight,
    INFINITY,
};
use crate::errors::GraphError;
use serde::Serialize;

/// Square weight matrix over `vexnum` labelled vertices.
///
/// Built once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixGraph {
    labels: Vec<String>,
    arcs: Vec<Vec<Weight>>,
    kind: GraphKind,
    arcnum: usize,
}

impl MatrixGraph {
    /// Build a matrix graph from an edge list.
    ///
    /// Unweighted kinds store weight 1 regardless of input; undirected kinds
    /// populate both `(i, j)` and `(j, i)`. Indices are not validated and an
    /// out-of-range endpoint panics; use [`MatrixGraph::try_from_edges`] for
    /// untrusted input.
    pub fn from_edges<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        kind: GraphKind,
        edges: &[EdgeTriple],
    ) -> Self {
        let labels = owned_labels(labels);
        let n = labels.len();
        let mut arcs = vec![vec![kind.absent(); n]; n];

        for &(from, to, weight) in edges {
            let weight = kind.effective_weight(weight);
            arcs[from][to] = weight;
            if !kind.is_directed() {
                arcs[to][from] = weight;
            }
        }

        Self {
            labels,
            arcs,
            kind,
            arcnum: edges.len(),
        }
    }

    /// Build a matrix graph after checking every endpoint is in range.
    pub fn try_from_edges<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        kind: GraphKind,
        edges: &[EdgeTriple],
    ) -> Result<Self, GraphError> {
        let labels = owned_labels(labels);
        validate_edges(labels.len(), edges)?;
        Ok(Self::from_edges(labels, kind, edges))
    }

    /// Build a matrix graph from literal rows.
    ///
    /// Rows are taken as-is: the caller guarantees squareness and, for
    /// undirected kinds, symmetry.
    pub fn from_rows<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        kind: GraphKind,
        rows: Vec<Vec<Weight>>,
    ) -> Result<Self, GraphError> {
        let labels = owned_labels(labels);
        if rows.len() != labels.len() {
            return Err(GraphError::LabelCountMismatch {
                expected: rows.len(),
                actual: labels.len(),
            });
        }

        let absent = kind.absent();
        let present = rows.iter().flatten().filter(|&&w| w != absent).count();
        let arcnum = if kind.is_directed() {
            present
        } else {
            present / 2
        };

        Ok(Self {
            labels,
            arcs: rows,
            kind,
            arcnum,
        })
    }

    pub fn vexnum(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges the graph was built from.
    pub fn arcnum(&self) -> usize {
        self.arcnum
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, vertex: usize) -> &str {
        &self.labels[vertex]
    }

    /// Raw matrix rows.
    pub fn arcs(&self) -> &[Vec<Weight>] {
        &self.arcs
    }

    /// Weight of arc `from -> to`, or `None` if there is no arc.
    pub fn weight(&self, from: usize, to: usize) -> Option<Weight> {
        let cell = self.arcs[from][to];
        (cell != self.kind.absent()).then_some(cell)
    }

    /// Weight of arc `from -> to`, with absent arcs reported as `INFINITY`.
    pub fn cost(&self, from: usize, to: usize) -> Weight {
        self.weight(from, to).unwrap_or(INFINITY)
    }

    /// Per-vertex degrees.
    pub fn degrees(&self) -> Vec<VertexDegree> {
        let n = self.vexnum();
        (0..n)
            .map(|i| {
                let out_degree = (0..n).filter(|&j| self.weight(i, j).is_some()).count();
                if self.kind.is_directed() {
                    let in_degree = (0..n).filter(|&j| self.weight(j, i).is_some()).count();
                    VertexDegree::Directed {
                        in_degree,
                        out_degree,
                    }
                } else {
                    VertexDegree::Undirected { degree: out_degree }
                }
            })
            .collect()
    }

    /// Convert to an adjacency list.
    ///
    /// Rows are scanned in index order and arcs are prepended, so every arc
    /// chain ends up in descending target order.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let n = self.vexnum();
        let mut list = AdjacencyList::empty(self.labels.clone(), self.kind);
        for i in 0..n {
            for j in 0..n {
                if let Some(weight) = self.weight(i, j) {
                    list.push_arc(i, j, weight);
                }
            }
        }
        list.set_edge_count(self.arcnum);
        list
    }
}
