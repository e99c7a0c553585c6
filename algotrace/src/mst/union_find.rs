//! Disjoint-set forest used by Kruskal.
//!
//! `find` compresses paths. `union` always makes the root with the smaller
//! index the new root, independent of set size, which keeps component
//! snapshots reproducible.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// `n` singleton sets `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Root of `x`'s set, compressing the path on the way.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets of `x` and `y`. Returns `false` if already merged.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        if root_x < root_y {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_x] = root_y;
        }
        true
    }

    /// Root of every element, as an owned copy.
    pub fn components(&mut self) -> Vec<usize> {
        (0..self.parent.len()).map(|i| self.find(i)).collect()
    }

    /// Raw parent links, as an owned copy.
    #[cfg(test)]
    fn parents(&self) -> Vec<usize> {
        self.parent.clone()
    }
}
