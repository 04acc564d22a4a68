//! Disjoint-set structures over elements `0..len`.
//!
//! Passing an element outside `0..len` is a programming error and panics.

////////////////////////////////////////////////////////////////////////////////

pub trait UnionFind {
    /// Creates a structure of `len` singleton components.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the number of components.
    fn count(&self) -> usize;

    /// Returns the canonical element of the component containing `p`.
    fn find(&self, p: usize) -> usize;

    /// Merges the components containing `p` and `q`.
    /// Does nothing if they are already the same component.
    fn union(&mut self, p: usize, q: usize);

    fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Quick-union weighted by component size.
///
/// Trees stay within `log2(len)` height, so `find` never has to mutate.
/// `union` additionally halves the paths it walks.
#[derive(Clone, Debug)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    // only meaningful for roots
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnion {
    fn root_halving(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }
}

impl UnionFind for WeightedQuickUnion {
    fn with_len(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    fn union(&mut self, p: usize, q: usize) {
        let root_p = self.root_halving(p);
        let root_q = self.root_halving(q);
        if root_p == root_q {
            return;
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Eager component labels: constant-time `find`, linear-time `union`.
#[derive(Clone, Debug)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickFind {
    fn with_len(len: usize) -> Self {
        Self {
            id: (0..len).collect(),
            count: len,
        }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> usize {
        self.id[p]
    }

    fn union(&mut self, p: usize, q: usize) {
        let (id_p, id_q) = (self.id[p], self.id[q]);
        if id_p == id_q {
            return;
        }

        self.id
            .iter_mut()
            .filter(|id| **id == id_p)
            .for_each(|id| *id = id_q);
        self.count -= 1;
    }
}
