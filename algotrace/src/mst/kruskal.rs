//! Kruskal's algorithm over a matrix graph.

use super::UnionFind;
use crate::graph::{MatrixGraph, WeightedEdge};
use crate::trace::{AuxSnapshot, MstStep, MstStepKind, Trace};
use tracing::debug;

/// Every edge `(i, j)` with `i < j` present in the matrix, in scan order.
fn collect_edges(graph: &MatrixGraph) -> Vec<WeightedEdge> {
    let n = graph.vexnum();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(weight) = graph.weight(i, j) {
                edges.push(WeightedEdge::new(i, j, weight));
            }
        }
    }
    edges
}

/// Build a spanning forest by ascending edge weight.
///
/// Emits a `compare` record announcing the sort, then a `compare` record per
/// edge checked and an `add` record per edge accepted. The sort is stable,
/// so equal weights keep scan order (increasing `i`, then `j`). The whole
/// sorted list is scanned even after `vexnum - 1` edges are accepted. Every
/// record carries a copy of the component root of each vertex.
pub fn kruskal(graph: &MatrixGraph) -> Trace<MstStep> {
    let mut edges = collect_edges(graph);
    edges.sort_by_key(|edge| edge.weight);

    let mut uf = UnionFind::new(graph.vexnum());
    let mut steps = Trace::new();

    steps.push(MstStep {
        kind: MstStepKind::Compare,
        edge: None,
        message: "Sort all edges by weight".to_string(),
        aux: AuxSnapshot::Components(uf.components()),
    });

    let mut accepted = 0usize;
    for edge in &edges {
        let name = format!(
            "({},{},{})",
            graph.label(edge.from),
            graph.label(edge.to),
            edge.weight
        );

        steps.push(MstStep {
            kind: MstStepKind::Compare,
            edge: Some(*edge),
            message: format!("Check edge {name}"),
            aux: AuxSnapshot::Components(uf.components()),
        });

        if uf.union(edge.from, edge.to) {
            accepted += 1;
            steps.push(MstStep {
                kind: MstStepKind::Add,
                edge: Some(*edge),
                message: format!("Accept edge {name}"),
                aux: AuxSnapshot::Components(uf.components()),
            });
        }
    }

    debug!(
        vertices = graph.vexnum(),
        edges = edges.len(),
        accepted,
        records = steps.len(),
        "Kruskal trace complete"
    );
    steps
}
