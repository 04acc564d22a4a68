//! Traversal-based fullness and percolation checks.
//!
//! These walk the open sites from scratch on every call and serve as a
//! reference for the incremental union-find answers of [`Percolation`].

use std::collections::{HashSet, VecDeque};

use crate::{grid::Percolation, layout::Site, union_find::UnionFind};

////////////////////////////////////////////////////////////////////////////////

fn flood<U: UnionFind>(grid: &Percolation<U>) -> HashSet<Site> {
    let layout = grid.layout();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::with_capacity(layout.size());

    for col in 0..layout.size() {
        let root = Site::new(0, col);
        if grid.is_site_open(root) && visited.insert(root) {
            queue.push_back(root);
        }
    }

    while let Some(site) = queue.pop_front() {
        for nb in layout.neighbours(site) {
            if grid.is_site_open(nb) && visited.insert(nb) {
                queue.push_back(nb);
            }
        }
    }

    visited
}

/// Returns 1-based coordinates of every site reachable from an open top-row
/// site through open neighbours.
pub fn full_sites<U: UnionFind>(grid: &Percolation<U>) -> HashSet<(usize, usize)> {
    flood(grid)
        .into_iter()
        .map(|site| (site.row + 1, site.col + 1))
        .collect()
}

/// Returns `true` if any bottom-row site is reachable from the top row.
pub fn percolates<U: UnionFind>(grid: &Percolation<U>) -> bool {
    let layout = grid.layout();
    flood(grid).into_iter().any(|site| layout.is_bottom(site))
}
