//! Algotrace - Step-by-Step Traces of Classic Algorithms
//!
//! Every engine runs to completion and returns an ordered, replayable trace
//! of discrete execution events:
//! - Graph traversal (DFS / BFS) over an adjacency list
//! - Minimum spanning trees (Prim, Kruskal with union-find) over a matrix
//! - Critical-path scheduling over an activity network
//! - Binary search tree maintenance with a resumable search walk
//! - Hash tables with linear probing and separate chaining
//! - Sequential and binary search over a static record table
//!
//! Consumers keep a cursor into a [`Trace`] and derive what is visible at any
//! step with [`Trace::replay`].

pub mod bst;
pub mod config;
pub mod critical_path;
pub mod errors;
pub mod fixtures;
pub mod graph;
pub mod hash;
pub mod mst;
pub mod static_search;
pub mod trace;
pub mod traversal;

pub use errors::{ConfigError, GraphError, HashError};
pub use trace::{Replay, Trace};
