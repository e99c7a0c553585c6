//! Depth-first and breadth-first traversal
//!
//! Both traversals cover disconnected graphs by trying every vertex
//! `0..vexnum` in index order as a component root. Neighbors are scanned in
//! arc-chain order (reverse insertion order), never numeric order.

use crate::graph::AdjacencyList;
use crate::trace::{Trace, TraversalStep};
use std::collections::VecDeque;
use tracing::debug;

/// Depth-first traversal.
///
/// Each unvisited neighbor emits `edge(v, neighbor)` and is explored
/// completely before the next arc of `v`'s chain is considered.
pub fn dfs(graph: &AdjacencyList) -> Trace<TraversalStep> {
    fn visit(
        graph: &AdjacencyList,
        v: usize,
        visited: &mut [bool],
        trace: &mut Trace<TraversalStep>,
    ) {
        visited[v] = true;
        trace.push(TraversalStep::Visit { vertex: v });

        for to in graph.neighbors(v) {
            if !visited[to] {
                trace.push(TraversalStep::Edge { from: v, to });
                visit(graph, to, visited, trace);
            }
        }
    }

    let mut visited = vec![false; graph.vexnum()];
    let mut trace = Trace::new();
    let mut components = 0usize;

    for root in 0..graph.vexnum() {
        if !visited[root] {
            components += 1;
            visit(graph, root, &mut visited, &mut trace);
        }
    }

    debug!(
        vertices = graph.vexnum(),
        components,
        records = trace.len(),
        "DFS trace complete"
    );
    trace
}

/// Breadth-first traversal.
///
/// A newly discovered neighbor is marked visited and emits `edge(u, neighbor)`
/// immediately followed by `visit(neighbor)`.
pub fn bfs(graph: &AdjacencyList) -> Trace<TraversalStep> {
    let mut visited = vec![false; graph.vexnum()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut trace = Trace::new();
    let mut components = 0usize;

    for root in 0..graph.vexnum() {
        if visited[root] {
            continue;
        }
        components += 1;
        visited[root] = true;
        trace.push(TraversalStep::Visit { vertex: root });
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            for to in graph.neighbors(u) {
                if !visited[to] {
                    visited[to] = true;
                    trace.push(TraversalStep::Edge { from: u, to });
                    trace.push(TraversalStep::Visit { vertex: to });
                    queue.push_back(to);
                }
            }
        }
    }

    debug!(
        vertices = graph.vexnum(),
        components,
        records = trace.len(),
        "BFS trace complete"
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;

    fn visit_order(trace: &Trace<TraversalStep>) -> Vec<usize> {
        trace.replay_all().visited
    }

    #[test]
    fn test_empty_graph() {
        let g = AdjacencyList::from_edges(Vec::<String>::new(), GraphKind::DirectedUnweighted, &[]);
        assert!(dfs(&g).is_empty());
        assert!(bfs(&g).is_empty());
    }

    #[test]
    fn test_dfs_diamond_follows_chain_order() {
        //     A
        //    / \
        //   B   C
        //    \ /
        //     D
        // A's chain is C, B (B inserted first)
        let g = AdjacencyList::from_edges(
            ["A", "B", "C", "D"],
            GraphKind::DirectedUnweighted,
            &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)],
        );
        let trace = dfs(&g);

        assert_eq!(visit_order(&trace), vec![0, 2, 3, 1]);
        assert_eq!(
            trace.records(),
            &[
                TraversalStep::Visit { vertex: 0 },
                TraversalStep::Edge { from: 0, to: 2 },
                TraversalStep::Visit { vertex: 2 },
                TraversalStep::Edge { from: 2, to: 3 },
                TraversalStep::Visit { vertex: 3 },
                TraversalStep::Edge { from: 0, to: 1 },
                TraversalStep::Visit { vertex: 1 },
            ]
        );
    }

    #[test]
    fn test_bfs_edge_then_visit() {
        let g = AdjacencyList::from_edges(
            ["A", "B", "C", "D"],
            GraphKind::DirectedUnweighted,
            &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)],
        );
        let trace = bfs(&g);

        assert_eq!(
            trace.records(),
            &[
                TraversalStep::Visit { vertex: 0 },
                TraversalStep::Edge { from: 0, to: 2 },
                TraversalStep::Visit { vertex: 2 },
                TraversalStep::Edge { from: 0, to: 1 },
                TraversalStep::Visit { vertex: 1 },
                TraversalStep::Edge { from: 2, to: 3 },
                TraversalStep::Visit { vertex: 3 },
            ]
        );
    }

    #[test]
    fn test_disconnected_components_rooted_in_index_order() {
        // A - B    C - D
        let g = AdjacencyList::from_edges(
            ["A", "B", "C", "D"],
            GraphKind::UndirectedUnweighted,
            &[(0, 1, 1), (2, 3, 1)],
        );

        for trace in [dfs(&g), bfs(&g)] {
            assert_eq!(visit_order(&trace), vec![0, 1, 2, 3]);
            assert_eq!(trace.replay_all().edges, vec![(0, 1), (2, 3)]);
        }
    }

    #[test]
    fn test_cycle_visits_each_vertex_once() {
        // A -> B -> C -> A
        let g = AdjacencyList::from_edges(
            ["A", "B", "C"],
            GraphKind::DirectedUnweighted,
            &[(0, 1, 1), (1, 2, 1), (2, 0, 1)],
        );
        let trace = dfs(&g);
        assert_eq!(visit_order(&trace), vec![0, 1, 2]);
        assert_eq!(trace.replay_all().edges.len(), 2);
    }
}
