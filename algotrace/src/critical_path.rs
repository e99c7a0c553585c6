//! Critical-path scheduling over an activity network
//!
//! The forward pass is a queue-driven topological sweep computing earliest
//! start times. The backward pass resets every latest time to the project
//! finish time and tightens them in descending index order, which matches
//! reverse topological order only when vertex indices are already
//! topologically sorted.

use crate::errors::GraphError;
use crate::graph::{owned_labels, validate_edges, EdgeTriple, Weight, WeightedEdge};
use crate::trace::{CriticalPathStep, Phase, Trace, VertexTimes};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Outgoing activity of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub to: usize,
    pub weight: Weight,
}

/// Weighted directed network, one activity list per vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityNetwork {
    labels: Vec<String>,
    adj: Vec<Vec<Activity>>,
}

impl ActivityNetwork {
    /// Build a network from `(from, to, duration)` triples.
    ///
    /// Activities keep input order within each vertex.
    pub fn from_activities<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        activities: &[EdgeTriple],
    ) -> Self {
        let labels = owned_labels(labels);
        let mut adj = vec![Vec::new(); labels.len()];
        for &(from, to, weight) in activities {
            adj[from].push(Activity { to, weight });
        }
        Self { labels, adj }
    }

    /// Build a network after checking every endpoint is in range.
    pub fn try_from_activities<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        activities: &[EdgeTriple],
    ) -> Result<Self, GraphError> {
        let labels = owned_labels(labels);
        validate_edges(labels.len(), activities)?;
        Ok(Self::from_activities(labels, activities))
    }

    pub fn vexnum(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, vertex: usize) -> &str {
        &self.labels[vertex]
    }

    pub fn activities(&self, vertex: usize) -> &[Activity] {
        &self.adj[vertex]
    }

    /// In-degree of every vertex.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.vexnum()];
        for activity in self.adj.iter().flatten() {
            degrees[activity.to] += 1;
        }
        degrees
    }
}

/// Working arrays of one analysis run.
struct Times {
    early: Vec<Weight>,
    late: Option<Vec<Weight>>,
    remaining: Vec<usize>,
}

impl Times {
    fn snapshot(&self) -> Vec<VertexTimes> {
        (0..self.early.len())
            .map(|v| VertexTimes {
                early: self.early[v],
                late: self.late.as_ref().map(|late| late[v]),
                in_degree: self.remaining[v],
            })
            .collect()
    }
}

fn record(phase: Phase, vertex: Option<usize>, message: String, times: &Times) -> CriticalPathStep {
    CriticalPathStep {
        phase,
        vertex,
        message,
        vertices: times.snapshot(),
        critical_vertices: Vec::new(),
        critical_activities: Vec::new(),
    }
}

/// Run the forward and backward passes and mark the critical vertices.
///
/// Emits a `forward` announcement, one `forward` record per dequeued vertex,
/// a `backward` announcement, one `backward` record per vertex (descending
/// index) and a final `critical` record.
pub fn analyze(network: &ActivityNetwork) -> Trace<CriticalPathStep> {
    let n = network.vexnum();
    let mut steps = Trace::new();
    let mut times = Times {
        early: vec![0; n],
        late: None,
        remaining: network.in_degrees(),
    };

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| times.remaining[v] == 0).collect();
    steps.push(record(
        Phase::Forward,
        None,
        "Forward pass: computing earliest start times".to_string(),
        &times,
    ));

    let mut processed = 0usize;
    while let Some(v) = queue.pop_front() {
        processed += 1;
        for activity in network.activities(v) {
            let to = activity.to;
            times.early[to] = times.early[to].max(times.early[v] + activity.weight);
            times.remaining[to] -= 1;
            if times.remaining[to] == 0 {
                queue.push_back(to);
            }
        }

        steps.push(record(
            Phase::Forward,
            Some(v),
            format!(
                "Earliest start of {}: {}",
                network.label(v),
                times.early[v]
            ),
            &times,
        ));
    }

    if processed < n {
        warn!(
            vertices = n,
            processed, "Forward pass stalled, network contains a cycle"
        );
    }

    let finish = times.early.iter().copied().max().unwrap_or(0);
    times.late = Some(vec![finish; n]);
    steps.push(record(
        Phase::Backward,
        None,
        format!("Backward pass: latest start times from finish time {finish}"),
        &times,
    ));

    for i in (0..n).rev() {
        if let Some(late) = times.late.as_mut() {
            for activity in network.activities(i) {
                late[i] = late[i].min(late[activity.to] - activity.weight);
            }
        }

        let late_i = times.late.as_ref().map_or(finish, |late| late[i]);
        steps.push(record(
            Phase::Backward,
            Some(i),
            format!("Latest start of {}: {}", network.label(i), late_i),
            &times,
        ));
    }

    let late = times.late.clone().unwrap_or_default();
    let critical_vertices: Vec<usize> = (0..n).filter(|&v| times.early[v] == late[v]).collect();
    let critical_activities: Vec<WeightedEdge> = (0..n)
        .flat_map(|u| {
            network
                .activities(u)
                .iter()
                .map(move |a| WeightedEdge::new(u, a.to, a.weight))
        })
        .filter(|e| times.early[e.from] == late[e.to] - e.weight)
        .collect();

    debug!(
        vertices = n,
        finish,
        critical = critical_vertices.len(),
        records = steps.len() + 1,
        "Critical path trace complete"
    );

    let mut last = record(
        Phase::Critical,
        None,
        "Critical path found".to_string(),
        &times,
    );
    last.critical_vertices = critical_vertices;
    last.critical_activities = critical_activities;
    steps.push(last);

    steps
}
