//! Binary search tree engine
//!
//! Trees are `Option<Box<Node<V>>>` values. `insert` and `delete` consume a
//! root and hand back the new root, re-attaching each child subtree on the
//! way out of the recursion. Keys are unique: inserting an existing key and
//! deleting an absent key both return the tree unchanged.
//!
//! Searching is a resumable walk. [`SearchWalk::step`] pauses at every
//! visited node; the next call decides between stopping on a match and
//! descending into exactly one child. [`search_observed`] drives the walk
//! with an async observer awaited once per visited node.

use serde::Serialize;
use std::cmp::Ordering;
use std::future::Future;
use tracing::debug;

/// Ordering key.
pub type Key = i64;

/// Key plus payload stored in a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry<V> {
    pub key: Key,
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new(key: Key, value: V) -> Self {
        Self { key, value }
    }
}

/// Tree node owning its two subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<V> {
    entry: Entry<V>,
    left: Tree<V>,
    right: Tree<V>,
}

/// Owned (possibly empty) tree.
pub type Tree<V> = Option<Box<Node<V>>>;

impl<V> Node<V> {
    fn leaf(entry: Entry<V>) -> Box<Self> {
        Box::new(Self {
            entry,
            left: None,
            right: None,
        })
    }

    pub fn entry(&self) -> &Entry<V> {
        &self.entry
    }

    pub fn key(&self) -> Key {
        self.entry.key
    }

    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.left().map_or(0, Node::node_count) + self.right().map_or(0, Node::node_count)
    }
}

/// Insert `entry`, returning the new root.
pub fn insert<V>(root: Tree<V>, entry: Entry<V>) -> Tree<V> {
    let Some(mut node) = root else {
        return Some(Node::leaf(entry));
    };

    match entry.key.cmp(&node.entry.key) {
        Ordering::Less => node.left = insert(node.left.take(), entry),
        Ordering::Greater => node.right = insert(node.right.take(), entry),
        Ordering::Equal => {}
    }
    Some(node)
}

/// Delete `key`, returning the new root.
///
/// A node with two children keeps its place and takes over the entry of its
/// in-order successor, whose own node is then removed from the right
/// subtree.
pub fn delete<V>(root: Tree<V>, key: Key) -> Tree<V> {
    let mut node = root?;

    match key.cmp(&node.entry.key) {
        Ordering::Less => {
            node.left = delete(node.left.take(), key);
            Some(node)
        }
        Ordering::Greater => {
            node.right = delete(node.right.take(), key);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (None, Some(right)) => Some(right),
            (Some(left), None) => Some(left),
            (Some(left), Some(right)) => {
                let (successor, rest) = remove_min(right);
                node.entry = successor;
                node.left = Some(left);
                node.right = rest;
                Some(node)
            }
        },
    }
}

/// Detach the leftmost node of a subtree, returning its entry and the
/// remaining subtree.
fn remove_min<V>(mut node: Box<Node<V>>) -> (Entry<V>, Tree<V>) {
    match node.left.take() {
        None => {
            let Node { entry, right, .. } = *node;
            (entry, right)
        }
        Some(left) => {
            let (entry, rest) = remove_min(left);
            node.left = rest;
            (entry, Some(node))
        }
    }
}

/// Build a tree by inserting entries in order.
pub fn build<V>(entries: impl IntoIterator<Item = Entry<V>>) -> Tree<V> {
    entries.into_iter().fold(None, insert)
}

/// Build a height-balanced tree from entries sorted by key.
///
/// The root of every subtree is the entry at `(start + end) / 2`.
pub fn build_balanced<V: Clone>(sorted: &[Entry<V>]) -> Tree<V> {
    if sorted.is_empty() {
        return None;
    }

    let mid = (sorted.len() - 1) / 2;
    let mut node = Node::leaf(sorted[mid].clone());
    node.left = build_balanced(&sorted[..mid]);
    node.right = build_balanced(&sorted[mid + 1..]);
    Some(node)
}

/// Entries in ascending key order.
pub fn in_order<V>(root: Option<&Node<V>>) -> Vec<&Entry<V>> {
    fn walk<'a, V>(node: Option<&'a Node<V>>, out: &mut Vec<&'a Entry<V>>) {
        if let Some(node) = node {
            walk(node.left(), out);
            out.push(&node.entry);
            walk(node.right(), out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Outcome of a search.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchResult<'a, V> {
    /// Matching node, if any
    pub node: Option<&'a Node<V>>,
    /// Nodes visited, one comparison each
    pub comparisons: usize,
}

impl<V> Clone for SearchResult<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for SearchResult<'_, V> {}

impl<V> SearchResult<'_, V> {
    pub fn found(&self) -> bool {
        self.node.is_some()
    }
}

/// Result of one step of a [`SearchWalk`].
#[derive(Debug, PartialEq, Eq)]
pub enum SearchStep<'a, V> {
    /// Paused at a visited node; call `step` again to continue
    Visit(&'a Node<V>),
    /// Walk finished
    Done(SearchResult<'a, V>),
}

/// Resumable search walk from a root towards `key`.
#[derive(Debug)]
pub struct SearchWalk<'a, V> {
    key: Key,
    next: Option<&'a Node<V>>,
    paused_at: Option<&'a Node<V>>,
    comparisons: usize,
    result: Option<SearchResult<'a, V>>,
}

impl<'a, V> SearchWalk<'a, V> {
    pub fn new(root: Option<&'a Node<V>>, key: Key) -> Self {
        Self {
            key,
            next: root,
            paused_at: None,
            comparisons: 0,
            result: None,
        }
    }

    /// Advance to the next visited node, or finish.
    ///
    /// Once finished, every further call returns the same `Done`.
    pub fn step(&mut self) -> SearchStep<'a, V> {
        if let Some(result) = self.result {
            return SearchStep::Done(result);
        }

        if let Some(node) = self.paused_at.take() {
            match self.key.cmp(&node.key()) {
                Ordering::Equal => return self.finish(Some(node)),
                Ordering::Less => self.next = node.left(),
                Ordering::Greater => self.next = node.right(),
            }
        }

        match self.next.take() {
            Some(node) => {
                self.comparisons += 1;
                self.paused_at = Some(node);
                SearchStep::Visit(node)
            }
            None => self.finish(None),
        }
    }

    /// Nodes visited so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Run the walk to completion.
    pub fn run(mut self) -> SearchResult<'a, V> {
        loop {
            if let SearchStep::Done(result) = self.step() {
                return result;
            }
        }
    }

    fn finish(&mut self, node: Option<&'a Node<V>>) -> SearchStep<'a, V> {
        let result = SearchResult {
            node,
            comparisons: self.comparisons,
        };
        self.result = Some(result);
        debug!(
            key = self.key,
            found = result.found(),
            comparisons = result.comparisons,
            "BST search finished"
        );
        SearchStep::Done(result)
    }
}

/// Search for `key` without observation.
pub fn search<V>(root: Option<&Node<V>>, key: Key) -> SearchResult<'_, V> {
    SearchWalk::new(root, key).run()
}

/// Search for `key`, awaiting `on_visit` once per visited node.
///
/// The walk does not advance until the observer's future completes, and
/// dropping the returned future stops the walk with no further callbacks.
pub async fn search_observed<'a, V, F, Fut>(
    root: Option<&'a Node<V>>,
    key: Key,
    mut on_visit: F,
) -> SearchResult<'a, V>
where
    F: FnMut(&'a Node<V>) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut walk = SearchWalk::new(root, key);
    loop {
        match walk.step() {
            SearchStep::Visit(node) => on_visit(node).await,
            SearchStep::Done(result) => return result,
        }
    }
}
