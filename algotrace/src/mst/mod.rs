//! Minimum spanning tree engines
//!
//! Both engines read a matrix graph as undirected: absent cells are treated
//! as `INFINITY`. A disconnected input is not an error; the consumer detects
//! it by counting selected edges, see [`MstSummary`].

mod kruskal;
mod prim;
mod union_find;

pub use kruskal::kruskal;
pub use prim::prim;
pub use union_find::UnionFind;

use crate::graph::WeightedEdge;
use crate::trace::{MstStep, Trace};
use serde::Serialize;

/// Outcome of an MST trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstSummary {
    pub edges: Vec<WeightedEdge>,
    pub total_weight: i64,
    /// `true` when `vexnum - 1` edges were selected
    pub spanning: bool,
}

impl MstSummary {
    /// Summarize a complete Prim or Kruskal trace over `vexnum` vertices.
    pub fn from_trace(trace: &Trace<MstStep>, vexnum: usize) -> Self {
        let state = trace.replay_all();
        let spanning = state.selected.len() + 1 == vexnum.max(1);
        Self {
            edges: state.selected,
            total_weight: state.total_weight,
            spanning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::graph::{GraphKind, MatrixGraph};

    #[test]
    fn test_prim_and_kruskal_agree_on_weight() {
        let g = fixtures::mst_graph();
        let p = MstSummary::from_trace(&prim(&g), g.vexnum());
        let k = MstSummary::from_trace(&kruskal(&g), g.vexnum());

        assert!(p.spanning);
        assert!(k.spanning);
        assert_eq!(p.total_weight, k.total_weight);
    }

    #[test]
    fn test_disconnected_is_not_spanning() {
        let g = MatrixGraph::from_edges(
            ["A", "B", "C", "D"],
            GraphKind::UndirectedWeighted,
            &[(0, 1, 1), (2, 3, 1)],
        );
        let p = MstSummary::from_trace(&prim(&g), g.vexnum());
        let k = MstSummary::from_trace(&kruskal(&g), g.vexnum());

        assert!(!p.spanning);
        assert_eq!(p.edges.len(), 1);
        // Kruskal builds a spanning forest
        assert!(!k.spanning);
        assert_eq!(k.edges.len(), 2);
    }
}
