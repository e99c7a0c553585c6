//! Prim's algorithm over a matrix graph.

use crate::graph::{MatrixGraph, WeightedEdge, INFINITY};
use crate::trace::{AuxSnapshot, MstStep, MstStepKind, Trace};
use tracing::{debug, trace, warn};

/// Grow a spanning tree from vertex 0.
///
/// Emits one `select` record for the start vertex, one `add` record per
/// vertex joined and one `compare` record per `lowcost` improvement. Every
/// record carries a copy of `lowcost` (tree members hold 0). The minimum
/// scan is strict `<` in index order, so the lowest index wins ties. A
/// disconnected graph ends the trace early.
pub fn prim(graph: &MatrixGraph) -> Trace<MstStep> {
    let n = graph.vexnum();
    let mut steps = Trace::new();
    if n == 0 {
        return steps;
    }

    let mut lowcost: Vec<_> = (0..n).map(|i| graph.cost(0, i)).collect();
    let mut closest = vec![0usize; n];
    let mut used = vec![false; n];
    used[0] = true;
    lowcost[0] = 0;

    steps.push(MstStep {
        kind: MstStepKind::Select,
        edge: None,
        message: format!("Start building the spanning tree from {}", graph.label(0)),
        aux: AuxSnapshot::Closedge(lowcost.clone()),
    });

    let mut added = 0usize;
    for _ in 1..n {
        let mut min_cost = INFINITY;
        let mut min_j = None;
        for j in 0..n {
            if !used[j] && lowcost[j] < min_cost {
                min_cost = lowcost[j];
                min_j = Some(j);
            }
        }

        let Some(j) = min_j else {
            warn!(
                vertices = n,
                added, "No reachable vertex left, graph is disconnected"
            );
            break;
        };

        used[j] = true;
        lowcost[j] = 0;
        added += 1;

        let edge = WeightedEdge::new(closest[j], j, min_cost);
        steps.push(MstStep {
            kind: MstStepKind::Add,
            edge: Some(edge),
            message: format!(
                "Select edge ({},{},{})",
                graph.label(edge.from),
                graph.label(edge.to),
                edge.weight
            ),
            aux: AuxSnapshot::Closedge(lowcost.clone()),
        });

        for k in 0..n {
            let cost = graph.cost(j, k);
            if !used[k] && cost < lowcost[k] {
                trace!(vertex = k, via = j, cost, "Relaxed lowcost");
                lowcost[k] = cost;
                closest[k] = j;
                steps.push(MstStep {
                    kind: MstStepKind::Compare,
                    edge: None,
                    message: format!("Lowcost of {} improves to {}", graph.label(k), cost),
                    aux: AuxSnapshot::Closedge(lowcost.clone()),
                });
            }
        }
    }

    debug!(vertices = n, added, records = steps.len(), "Prim trace complete");
    steps
}
