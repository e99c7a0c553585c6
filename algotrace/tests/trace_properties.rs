//! Structural properties of engine traces over seeded random inputs.

use algotrace::bst::{self, Entry, Key, Tree};
use algotrace::critical_path::{analyze, ActivityNetwork};
use algotrace::fixtures::{self, letter_labels, RandomGraphs};
use algotrace::graph::{AdjacencyList, GraphKind, MatrixGraph, Weight};
use algotrace::hash::{ChainedTable, LinearProbeTable};
use algotrace::mst::{kruskal, prim, MstSummary};
use algotrace::static_search::{self, StaticTable};
use algotrace::trace::{MstStepKind, Trace, TraversalStep};
use algotrace::traversal::{bfs, dfs};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEEDS: [u64; 8] = [1, 2, 3, 5, 8, 13, 21, 42];

// ============================================================================
// Traversal
// ============================================================================

fn assert_well_formed(graph: &AdjacencyList, trace: &Trace<TraversalStep>) {
    let n = graph.vexnum();
    let state = trace.replay_all();

    // Every vertex visited exactly once
    let mut seen = vec![false; n];
    for &v in &state.visited {
        assert!(!seen[v], "vertex {v} visited twice");
        seen[v] = true;
    }
    assert!(seen.iter().all(|&s| s));

    // Every edge is immediately followed by the visit of its target
    let records = trace.records();
    for (i, step) in records.iter().enumerate() {
        if let TraversalStep::Edge { from, to } = *step {
            assert_eq!(records[i + 1], TraversalStep::Visit { vertex: to });
            assert!(graph.neighbors(from).any(|w| w == to));
        }
    }

    // A forest: one tree edge per non-root vertex
    let roots = records
        .iter()
        .enumerate()
        .filter(|(i, step)| {
            matches!(step, TraversalStep::Visit { .. })
                && (*i == 0 || !matches!(records[i - 1], TraversalStep::Edge { .. }))
        })
        .count();
    assert_eq!(state.edges.len(), n - roots);
    assert_eq!(trace.len(), n + state.edges.len());
}

#[test]
fn test_traversals_visit_every_vertex_once() {
    for seed in SEEDS {
        let mut gen = RandomGraphs::seeded(seed);
        for kind in [GraphKind::DirectedUnweighted, GraphKind::UndirectedUnweighted] {
            let edges = gen.edges(20, 0.12, 1);
            let graph = AdjacencyList::from_edges(letter_labels(20), kind, &edges);

            assert_well_formed(&graph, &dfs(&graph));
            assert_well_formed(&graph, &bfs(&graph));
        }
    }
}

#[test]
fn test_dfs_golden_scenario() {
    // Arcs are prepended, so inserting A->C before A->B puts B first in A's chain
    let graph = AdjacencyList::from_edges(
        ["A", "B", "C", "D"],
        GraphKind::DirectedUnweighted,
        &[(0, 2, 1), (0, 1, 1), (1, 3, 1), (2, 3, 1)],
    );

    assert_eq!(
        dfs(&graph).into_records(),
        vec![
            TraversalStep::Visit { vertex: 0 },
            TraversalStep::Edge { from: 0, to: 1 },
            TraversalStep::Visit { vertex: 1 },
            TraversalStep::Edge { from: 1, to: 3 },
            TraversalStep::Visit { vertex: 3 },
            TraversalStep::Edge { from: 0, to: 2 },
            TraversalStep::Visit { vertex: 2 },
        ]
    );
    assert_eq!(bfs(&graph).replay_all().visited, vec![0, 1, 2, 3]);

    // Inserted in A->B, A->C order the chain is reversed
    let diamond = AdjacencyList::from_edges(
        ["A", "B", "C", "D"],
        GraphKind::DirectedUnweighted,
        &fixtures::DIAMOND_EDGES,
    );
    assert_eq!(dfs(&diamond).replay_all().visited, vec![0, 2, 3, 1]);
}

#[test]
fn test_reference_traversal_graph() {
    let graph = fixtures::traversal_graph();
    // Chains: A -> D -> B, B -> C, C -> E, D -> E
    assert_eq!(dfs(&graph).replay_all().visited, vec![0, 3, 4, 1, 2]);
    assert_eq!(bfs(&graph).replay_all().visited, vec![0, 3, 1, 4, 2]);
}

#[test]
fn test_matrix_conversion_preserves_traversal_coverage() {
    for seed in SEEDS {
        let edges = RandomGraphs::seeded(seed).edges(15, 0.2, 9);
        let matrix =
            MatrixGraph::from_edges(letter_labels(15), GraphKind::DirectedWeighted, &edges);
        let list = matrix.to_adjacency_list();

        assert_eq!(list.edge_count(), matrix.arcnum());
        assert_well_formed(&list, &dfs(&list));
    }
}

// ============================================================================
// Replay
// ============================================================================

#[test]
fn test_replay_prefixes_are_monotone() {
    let graph = fixtures::traversal_graph();
    let trace = dfs(&graph);

    for cursor in 0..trace.len() {
        let state = trace.replay(cursor);
        assert_eq!(state, trace.replay(cursor));
        assert_eq!(state.visited.len() + state.edges.len(), cursor + 1);

        if cursor > 0 {
            let previous = trace.replay(cursor - 1);
            assert!(state.visited.starts_with(&previous.visited));
        }
    }
    assert_eq!(trace.replay(trace.len() - 1), trace.replay_all());
}

// ============================================================================
// Minimum spanning tree
// ============================================================================

#[test]
fn test_prim_and_kruskal_agree_on_random_graphs() {
    for seed in SEEDS {
        let n = 12;
        let edges = RandomGraphs::seeded(seed).connected_edges(n, 0.3, 20);
        let graph =
            MatrixGraph::from_edges(letter_labels(n), GraphKind::UndirectedWeighted, &edges);

        let p = MstSummary::from_trace(&prim(&graph), n);
        let k = MstSummary::from_trace(&kruskal(&graph), n);

        assert!(p.spanning, "seed {seed}");
        assert!(k.spanning, "seed {seed}");
        assert_eq!(p.edges.len(), n - 1);
        assert_eq!(p.total_weight, k.total_weight, "seed {seed}");
    }
}

#[test]
fn test_kruskal_accepts_in_nondecreasing_weight() {
    for seed in SEEDS {
        let edges = RandomGraphs::seeded(seed).connected_edges(10, 0.4, 15);
        let graph =
            MatrixGraph::from_edges(letter_labels(10), GraphKind::UndirectedWeighted, &edges);
        let trace = kruskal(&graph);

        let weights: Vec<Weight> = trace
            .iter()
            .filter(|s| s.kind == MstStepKind::Add)
            .filter_map(|s| s.edge)
            .map(|e| e.weight)
            .collect();
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_reference_mst_weight() {
    let graph = fixtures::mst_graph();
    let summary = MstSummary::from_trace(&prim(&graph), graph.vexnum());
    assert_eq!(summary.total_weight, fixtures::MST_GRAPH_WEIGHT);
}

// ============================================================================
// Critical path
// ============================================================================

#[test]
fn test_earliest_times_satisfy_every_activity() {
    for seed in SEEDS {
        let n = 14;
        let edges = RandomGraphs::seeded(seed).dag_edges(n, 0.25, 12);
        let network = ActivityNetwork::from_activities(letter_labels(n), &edges);
        let state = analyze(&network).replay_all();
        let early: Vec<Weight> = state.vertices.iter().map(|t| t.early).collect();
        let late: Vec<Weight> = state.vertices.iter().filter_map(|t| t.late).collect();

        for v in 0..n {
            let incoming: Vec<_> = edges.iter().filter(|&&(_, to, _)| to == v).collect();
            for &&(from, _, weight) in &incoming {
                assert!(early[v] >= early[from] + weight);
                assert!(late[from] <= late[v] - weight);
            }
            // Tight on at least one incoming activity
            if incoming.is_empty() {
                assert_eq!(early[v], 0);
            } else {
                assert!(incoming.iter().any(|&&(from, _, w)| early[v] == early[from] + w));
            }
            assert!(late[v] >= early[v], "negative slack at {v}, seed {seed}");
        }

        let finish = early.iter().copied().max().unwrap_or(0);
        let last_vertex = early.iter().position(|&e| e == finish).unwrap();
        assert!(state.critical_vertices.contains(&last_vertex));
        // Tight edges lead back from the finish to some source
        assert!(state.critical_vertices.iter().any(|&v| early[v] == 0));
    }
}

// ============================================================================
// Binary search tree
// ============================================================================

fn collect_keys(root: &Tree<()>) -> Vec<Key> {
    bst::in_order(root.as_deref()).iter().map(|e| e.key).collect()
}

#[test]
fn test_random_inserts_and_deletes_keep_order() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut expected = BTreeSet::new();
        let mut root: Tree<()> = None;

        for _ in 0..60 {
            let key = rng.gen_range(0..100);
            expected.insert(key);
            root = bst::insert(root, Entry::new(key, ()));
        }

        let mut inserted: Vec<Key> = expected.iter().copied().collect();
        inserted.shuffle(&mut rng);
        let (removed, kept) = inserted.split_at(inserted.len() / 2);
        for &key in removed {
            root = bst::delete(root, key);
            expected.remove(&key);
        }

        assert_eq!(collect_keys(&root), expected.iter().copied().collect::<Vec<_>>());
        assert_eq!(root.as_ref().map_or(0, |n| n.node_count()), expected.len());
        for &key in removed {
            assert!(!bst::search(root.as_deref(), key).found());
        }
        for &key in kept {
            let result = bst::search(root.as_deref(), key);
            assert_eq!(result.node.map(|n| n.key()), Some(key));
            assert!(result.comparisons >= 1);
        }
    }
}

#[test]
fn test_balanced_build_of_students() {
    let records = fixtures::students();
    let root = bst::build_balanced(&records);

    let keys: Vec<Key> = bst::in_order(root.as_deref()).iter().map(|e| e.key).collect();
    let expected: Vec<Key> = records.iter().map(|e| e.key).collect();
    assert_eq!(keys, expected);

    // 11 records fit in 4 levels
    for record in &records {
        assert!(bst::search(root.as_deref(), record.key).comparisons <= 4);
    }
}

// ============================================================================
// Hash tables
// ============================================================================

#[test]
fn test_every_built_key_is_found() {
    for seed in SEEDS {
        let keys = RandomGraphs::seeded(seed).keys(40, 1000);

        let linear = LinearProbeTable::with_modulus(53, 47)
            .unwrap()
            .build(&keys)
            .unwrap();
        let chained = ChainedTable::new(17).unwrap().build(&keys);

        for &key in &keys {
            let outcome = linear.search(key);
            let slot = outcome.found_at.unwrap();
            assert_eq!(linear.slots()[slot], Some(key));
            assert_eq!(outcome.probes.last(), Some(&slot));
            assert_eq!(outcome.probes[0], outcome.home);

            let outcome = chained.search(key);
            assert!(outcome.found());
            assert_eq!(outcome.comparisons, outcome.found_at.unwrap() + 1);
        }
        assert_eq!(linear.len(), keys.len());
        assert_eq!(chained.len(), keys.len());
    }
}

#[test]
fn test_reference_hash_layout() {
    let linear = LinearProbeTable::with_modulus(
        fixtures::LINEAR_TABLE_SLOTS,
        fixtures::HASH_MODULUS,
    )
    .unwrap()
    .build(&fixtures::HASH_KEYS)
    .unwrap();

    assert_eq!(
        linear.slots(),
        &[
            None,
            Some(14),
            Some(1),
            Some(68),
            Some(27),
            Some(55),
            Some(19),
            Some(20),
            Some(84),
            Some(79),
            Some(23),
            Some(11),
            Some(10),
            None,
            None,
            None,
        ]
    );
    // 79 hashes to 1 and probes the whole run up to slot 9
    assert_eq!(linear.search(79).comparisons, 9);

    assert_eq!(linear.average_search_length(&fixtures::HASH_KEYS), 2.5);
    assert_eq!(linear.average_search_length(&fixtures::HASH_MISS_KEYS), 7.0);
}

// ============================================================================
// Static tables
// ============================================================================

#[test]
fn test_sequential_and_binary_agree() {
    for seed in SEEDS {
        let keys = RandomGraphs::seeded(seed).keys(50, 200);
        let table: StaticTable<usize> = keys
            .iter()
            .enumerate()
            .map(|(i, &k)| Entry::new(k, i))
            .collect();
        let sorted = table.clone().into_sorted();
        // floor(log2(50)) + 1
        let bound = 6;

        for key in 0..200 {
            let scan = static_search::sequential(&table, key).replay_all();
            let halving = static_search::binary(&sorted, key);

            assert!(halving.len() <= bound, "key {key}, seed {seed}");
            let hit = halving.replay_all().found.and_then(|i| sorted.get(i));
            assert_eq!(hit.map(|e| e.key), scan.found.map(|_| key));

            // A scan stops at the first stored occurrence
            match scan.found {
                Some(index) => {
                    assert_eq!(keys.iter().position(|&k| k == key), Some(index));
                    assert_eq!(scan.comparisons, index + 1);
                }
                None => assert_eq!(scan.comparisons, keys.len()),
            }
        }
    }
}
