//! Trace records
//!
//! Every engine returns a fully materialized, append-only [`Trace`] of
//! discrete events. A consumer owns an integer cursor into the trace and
//! derives all visible state by replaying records `0..=cursor` through
//! [`Replay`]. Records carry owned snapshots, never references into the
//! engine's working arrays, so replaying a prefix always yields the same
//! state.

use crate::graph::{Weight, WeightedEdge};
use serde::Serialize;

/// Ordered sequence of records produced by one algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Default for Trace<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> Trace<R> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R: Replay> Trace<R> {
    /// Derive the visible state after records `0..=cursor`.
    ///
    /// A cursor past the end replays the whole trace.
    pub fn replay(&self, cursor: usize) -> R::State {
        let mut state = R::State::default();
        for record in self.records.iter().take(cursor.saturating_add(1)) {
            record.apply(&mut state);
        }
        state
    }

    /// Derive the final state after every record.
    pub fn replay_all(&self) -> R::State {
        let mut state = R::State::default();
        for record in &self.records {
            record.apply(&mut state);
        }
        state
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Folds a record into a derived visual state.
///
/// Implementations must only touch `state`.
pub trait Replay {
    type State: Default;

    fn apply(&self, state: &mut Self::State);
}

// ============================================================================
// Traversal
// ============================================================================

/// Traversal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraversalStep {
    Visit { vertex: usize },
    Edge { from: usize, to: usize },
}

/// State derived from a traversal trace prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraversalState {
    /// Vertices in visitation order
    pub visited: Vec<usize>,
    /// Tree edges in traversal order
    pub edges: Vec<(usize, usize)>,
    /// Most recently visited vertex
    pub current: Option<usize>,
}

impl Replay for TraversalStep {
    type State = TraversalState;

    fn apply(&self, state: &mut TraversalState) {
        match *self {
            TraversalStep::Visit { vertex } => {
                state.visited.push(vertex);
                state.current = Some(vertex);
            }
            TraversalStep::Edge { from, to } => state.edges.push((from, to)),
        }
    }
}

// ============================================================================
// Minimum spanning tree
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MstStepKind {
    /// Start vertex chosen
    Select,
    /// Edge accepted into the tree
    Add,
    /// Check or relaxation without accepting an edge
    Compare,
}

/// Auxiliary array captured at the moment a record was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum AuxSnapshot {
    /// Prim's `lowcost` array; tree members hold 0
    Closedge(Vec<Weight>),
    /// Kruskal's component root per vertex
    Components(Vec<usize>),
}

/// MST event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstStep {
    pub kind: MstStepKind,
    pub edge: Option<WeightedEdge>,
    pub message: String,
    pub aux: AuxSnapshot,
}

/// State derived from an MST trace prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MstState {
    /// Edges accepted so far, in order
    pub selected: Vec<WeightedEdge>,
    pub total_weight: i64,
    /// Edge named by the latest record, if any
    pub active_edge: Option<WeightedEdge>,
    pub message: String,
    pub aux: Option<AuxSnapshot>,
}

impl Replay for MstStep {
    type State = MstState;

    fn apply(&self, state: &mut MstState) {
        if let (MstStepKind::Add, Some(edge)) = (self.kind, self.edge) {
            state.selected.push(edge);
            state.total_weight += i64::from(edge.weight);
        }
        state.active_edge = self.edge;
        state.message.clone_from(&self.message);
        state.aux = Some(self.aux.clone());
    }
}

// ============================================================================
// Critical path
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Forward,
    Backward,
    Critical,
}

/// Times of a single vertex at the moment of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexTimes {
    pub early: Weight,
    /// `None` until the backward pass starts
    pub late: Option<Weight>,
    /// In-degree not yet consumed by the forward pass
    pub in_degree: usize,
}

impl VertexTimes {
    /// Zero slack.
    pub fn is_critical(&self) -> bool {
        self.late == Some(self.early)
    }
}

/// Critical-path event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalPathStep {
    pub phase: Phase,
    /// Vertex processed by this record; `None` for phase announcements
    pub vertex: Option<usize>,
    pub message: String,
    pub vertices: Vec<VertexTimes>,
    /// Ascending indices of zero-slack vertices (final record only)
    pub critical_vertices: Vec<usize>,
    /// Zero-slack activities (final record only)
    pub critical_activities: Vec<WeightedEdge>,
}

/// State derived from a critical-path trace prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CriticalPathState {
    pub phase: Option<Phase>,
    pub vertex: Option<usize>,
    pub message: String,
    pub vertices: Vec<VertexTimes>,
    pub critical_vertices: Vec<usize>,
    pub critical_activities: Vec<WeightedEdge>,
}

impl Replay for CriticalPathStep {
    type State = CriticalPathState;

    fn apply(&self, state: &mut CriticalPathState) {
        state.phase = Some(self.phase);
        state.vertex = self.vertex;
        state.message.clone_from(&self.message);
        state.vertices.clone_from(&self.vertices);
        state.critical_vertices.clone_from(&self.critical_vertices);
        state.critical_activities.clone_from(&self.critical_activities);
    }
}

// ============================================================================
// Static table lookup
// ============================================================================

/// Result of comparing the search key against one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Match,
    /// Sequential scan moves on
    Mismatch,
    /// Binary search continues below `index`
    Left,
    /// Binary search continues above `index`
    Right,
}

/// One key comparison of a static table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupStep {
    /// Record compared against
    pub index: usize,
    /// Key stored at `index`
    pub key: i64,
    pub verdict: Verdict,
    /// Inclusive bounds of a binary search before this comparison
    pub range: Option<(usize, usize)>,
}

/// State derived from a lookup trace prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupState {
    /// Indices compared, in order
    pub path: Vec<usize>,
    pub current: Option<usize>,
    pub range: Option<(usize, usize)>,
    pub found: Option<usize>,
    pub comparisons: usize,
}

impl Replay for LookupStep {
    type State = LookupState;

    fn apply(&self, state: &mut LookupState) {
        state.path.push(self.index);
        state.current = Some(self.index);
        state.range = self.range;
        state.comparisons += 1;
        if self.verdict == Verdict::Match {
            state.found = Some(self.index);
        }
    }
}
