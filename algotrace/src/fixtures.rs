//! Reference data sets and synthetic generators
//!
//! The reference sets are the classic classroom examples the engines are
//! demonstrated on. `RandomGraphs` produces seeded synthetic inputs for
//! benchmarks and property tests.

use crate::bst::Entry;
use crate::critical_path::ActivityNetwork;
use crate::graph::{AdjacencyList, EdgeTriple, GraphKind, MatrixGraph, Weight};
use crate::hash::HashKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Keys of the hash table example, in insertion order.
pub const HASH_KEYS: [HashKey; 12] = [19, 14, 23, 1, 68, 20, 84, 27, 55, 11, 10, 79];

/// One absent key per home position `0..13`, for unsuccessful lookups.
pub const HASH_MISS_KEYS: [HashKey; 13] = [26, 40, 15, 29, 30, 18, 32, 46, 60, 74, 36, 24, 38];

/// Slots of the linear probing example table.
pub const LINEAR_TABLE_SLOTS: usize = 16;

/// Modulus of both hash table examples (and bucket count of the chained one).
pub const HASH_MODULUS: usize = 13;

/// Labels `A`, `B`, … for `n` vertices.
pub fn letter_labels(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let letter = char::from(b'A' + (i % 26) as u8);
            if i < 26 {
                letter.to_string()
            } else {
                format!("{letter}{}", i / 26)
            }
        })
        .collect()
}

/// Five-vertex directed traversal example.
///
/// ```text
/// A -> B -> C -> E
///  \            ^
///   -> D -------'
/// ```
pub fn traversal_graph() -> AdjacencyList {
    AdjacencyList::from_edges(
        letter_labels(5),
        GraphKind::DirectedUnweighted,
        &[(0, 1, 1), (0, 3, 1), (1, 2, 1), (2, 4, 1), (3, 4, 1)],
    )
}

/// Edges of the four-vertex diamond `A->B, A->C, B->D, C->D`.
pub const DIAMOND_EDGES: [EdgeTriple; 4] = [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)];

/// Six-vertex undirected network whose minimum spanning tree weighs 15.
pub fn mst_graph() -> MatrixGraph {
    MatrixGraph::from_edges(
        letter_labels(6),
        GraphKind::UndirectedWeighted,
        &[
            (0, 1, 6),
            (0, 2, 1),
            (0, 3, 5),
            (1, 2, 5),
            (1, 4, 3),
            (2, 3, 5),
            (2, 4, 6),
            (2, 5, 4),
            (3, 5, 2),
            (4, 5, 6),
        ],
    )
}

/// Known minimum spanning tree weight of [`mst_graph`].
pub const MST_GRAPH_WEIGHT: i64 = 15;

/// Ten-vertex activity network; durations in days.
pub fn activity_network() -> ActivityNetwork {
    ActivityNetwork::from_activities(
        letter_labels(10),
        &[
            (0, 1, 8),
            (0, 2, 6),
            (0, 4, 7),
            (1, 3, 3),
            (2, 3, 10),
            (2, 6, 9),
            (4, 6, 9),
            (4, 7, 13),
            (3, 5, 4),
            (3, 8, 19),
            (6, 7, 2),
            (6, 8, 8),
            (7, 8, 6),
            (5, 9, 14),
            (8, 9, 10),
        ],
    )
}

/// Payload of the tree search example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: String,
    pub sex: char,
    pub age: u8,
}

/// Student records keyed by student number, in table order.
pub fn student_table() -> Vec<Entry<Student>> {
    [
        (56, "Zhang", 'F', 19),
        (19, "Wang", 'F', 20),
        (80, "Zhou", 'F', 19),
        (5, "Huang", 'M', 20),
        (21, "Zheng", 'M', 20),
        (64, "Li", 'M', 19),
        (88, "Liu", 'F', 18),
        (13, "Qian", 'F', 19),
        (37, "Sun", 'M', 20),
        (75, "Zhao", 'M', 20),
        (92, "Chen", 'M', 20),
    ]
    .into_iter()
    .map(|(key, name, sex, age)| {
        Entry::new(
            key,
            Student {
                name: name.to_string(),
                sex,
                age,
            },
        )
    })
    .collect()
}

/// [`student_table`] sorted by key.
pub fn students() -> Vec<Entry<Student>> {
    let mut records = student_table();
    records.sort_by_key(|entry| entry.key);
    records
}

/// Seeded generator of synthetic inputs.
pub struct RandomGraphs {
    rng: StdRng,
}

impl RandomGraphs {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Edges over `n` vertices, each unordered pair present with `density`.
    pub fn edges(&mut self, n: usize, density: f64, max_weight: Weight) -> Vec<EdgeTriple> {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rng.gen_bool(density) {
                    let (from, to) = if self.rng.gen_bool(0.5) { (i, j) } else { (j, i) };
                    edges.push((from, to, self.rng.gen_range(1..=max_weight)));
                }
            }
        }
        edges
    }

    /// Connected undirected edges: a random spanning path plus extra edges.
    pub fn connected_edges(
        &mut self,
        n: usize,
        density: f64,
        max_weight: Weight,
    ) -> Vec<EdgeTriple> {
        let mut edges: Vec<EdgeTriple> = (1..n)
            .map(|v| (self.rng.gen_range(0..v), v, self.rng.gen_range(1..=max_weight)))
            .collect();
        for (from, to, weight) in self.edges(n, density, max_weight) {
            if !edges.iter().any(|&(a, b, _)| (a, b) == (from, to) || (a, b) == (to, from)) {
                edges.push((from, to, weight));
            }
        }
        edges
    }

    /// Acyclic activities: every activity runs from a lower to a higher index.
    pub fn dag_edges(&mut self, n: usize, density: f64, max_weight: Weight) -> Vec<EdgeTriple> {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rng.gen_bool(density) {
                    edges.push((i, j, self.rng.gen_range(1..=max_weight)));
                }
            }
        }
        edges
    }

    /// `count` keys drawn from `0..max_key`, possibly repeating.
    pub fn keys(&mut self, count: usize, max_key: HashKey) -> Vec<HashKey> {
        (0..count).map(|_| self.rng.gen_range(0..max_key)).collect()
    }
}
