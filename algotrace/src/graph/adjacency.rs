//! Adjacency list representation
//!
//! Arc records live in a single arena owned by the graph. Each vertex holds
//! the index of the first arc of its chain and each arc holds the index of
//! the next one, so a chain is a singly linked list without back-references.
//!
//! Arcs are prepended: the most recently added arc is the head of its chain.
//! Traversals scan chains in stored order, so neighbor order is the reverse
//! of insertion order.

use super::{
    owned_labels, validate_edges, EdgeTriple, GraphKind, VertexDegree, Weight, WeightedEdge,
};
use crate::errors::GraphError;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A directed arc record in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArcNode {
    /// Target vertex index
    pub target: usize,
    pub weight: Weight,
    /// Next arc of the same chain
    next: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct VertexNode {
    label: String,
    first_arc: Option<usize>,
}

/// Adjacency-list graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyList {
    vertices: Vec<VertexNode>,
    arcs: Vec<ArcNode>,
    kind: GraphKind,
    edge_count: usize,
}

impl AdjacencyList {
    /// Build an adjacency list from an edge list.
    ///
    /// Every edge is prepended to its source chain; undirected kinds also
    /// prepend the reverse arc to the target chain. Unweighted kinds store
    /// weight 1. Indices are not validated.
    pub fn from_edges<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        kind: GraphKind,
        edges: &[EdgeTriple],
    ) -> Self {
        let mut graph = Self::empty(owned_labels(labels), kind);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Build an adjacency list after checking every endpoint is in range.
    pub fn try_from_edges<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        kind: GraphKind,
        edges: &[EdgeTriple],
    ) -> Result<Self, GraphError> {
        let labels = owned_labels(labels);
        validate_edges(labels.len(), edges)?;
        Ok(Self::from_edges(labels, kind, edges))
    }

    pub(crate) fn empty(labels: Vec<String>, kind: GraphKind) -> Self {
        Self {
            vertices: labels
                .into_iter()
                .map(|label| VertexNode {
                    label,
                    first_arc: None,
                })
                .collect(),
            arcs: Vec::new(),
            kind,
            edge_count: 0,
        }
    }

    /// Add an edge, honouring the graph kind.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        let weight = self.kind.effective_weight(weight);
        self.push_arc(from, to, weight);
        if !self.kind.is_directed() {
            self.push_arc(to, from, weight);
        }
        self.edge_count += 1;
    }

    /// Prepend a single arc record to `from`'s chain.
    pub(crate) fn push_arc(&mut self, from: usize, to: usize, weight: Weight) {
        let index = self.arcs.len();
        self.arcs.push(ArcNode {
            target: to,
            weight,
            next: self.vertices[from].first_arc,
        });
        self.vertices[from].first_arc = Some(index);
    }

    pub(crate) fn set_edge_count(&mut self, edge_count: usize) {
        self.edge_count = edge_count;
    }

    pub fn vexnum(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges added (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of arc records (an undirected edge contributes two).
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn label(&self, vertex: usize) -> &str {
        &self.vertices[vertex].label
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.label.as_str())
    }

    /// Arcs leaving `vertex`, in chain order.
    pub fn arcs(&self, vertex: usize) -> Arcs<'_> {
        Arcs {
            arena: &self.arcs,
            cursor: self.vertices[vertex].first_arc,
        }
    }

    /// Neighbor indices of `vertex`, in chain order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.arcs(vertex).map(|arc| arc.target)
    }

    /// Per-vertex degrees.
    pub fn degrees(&self) -> Vec<VertexDegree> {
        let n = self.vexnum();
        let mut in_degrees = vec![0usize; n];
        for arc in &self.arcs {
            in_degrees[arc.target] += 1;
        }

        (0..n)
            .map(|v| {
                let out_degree = self.arcs(v).count();
                if self.kind.is_directed() {
                    VertexDegree::Directed {
                        in_degree: in_degrees[v],
                        out_degree,
                    }
                } else {
                    VertexDegree::Undirected { degree: out_degree }
                }
            })
            .collect()
    }

    /// Every edge once, in vertex then chain order.
    ///
    /// Undirected kinds report each pair only the first time it is seen.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut edges = Vec::new();

        for from in 0..self.vexnum() {
            for arc in self.arcs(from) {
                let key = if self.kind.is_directed() {
                    (from, arc.target)
                } else {
                    (from.min(arc.target), from.max(arc.target))
                };
                if seen.insert(key) {
                    edges.push(WeightedEdge::new(from, arc.target, arc.weight));
                }
            }
        }

        edges
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, vertex) in self.vertices.iter().enumerate() {
            write!(f, "{} -> ", vertex.label)?;
            let mut first = true;
            for arc in self.arcs(v) {
                if !first {
                    write!(f, " -> ")?;
                }
                first = false;
                write!(f, "{}", self.vertices[arc.target].label)?;
                if arc.weight != 1 {
                    write!(f, "({})", arc.weight)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over one vertex's arc chain.
#[derive(Debug, Clone)]
pub struct Arcs<'a> {
    arena: &'a [ArcNode],
    cursor: Option<usize>,
}

impl<'a> Iterator for Arcs<'a> {
    type Item = &'a ArcNode;

    fn next(&mut self) -> Option<Self::Item> {
        let arc = &self.arena[self.cursor?];
        self.cursor = arc.next;
        Some(arc)
    }
}
