use std::fmt::Display;

use log::trace;

use crate::{
    error::Result,
    layout::{Site, SiteLayout},
    union_find::{UnionFind, WeightedQuickUnion},
};

////////////////////////////////////////////////////////////////////////////////

/// An N-by-N grid of sites that are opened one at a time.
///
/// Connectivity is maintained incrementally in two union-find structures over
/// the N² sites plus a virtual top and a virtual bottom site:
///
/// * `connectivity` links both virtual sites and answers [`percolates`];
/// * `fullness` never links the virtual bottom, so a bottom-row site cannot
///   become full through it once the grid percolates.
///
/// [`percolates`]: Percolation::percolates
#[derive(Clone, Debug)]
pub struct Percolation<U: UnionFind = WeightedQuickUnion> {
    layout: SiteLayout,
    open: Vec<bool>,
    open_count: usize,
    connectivity: U,
    fullness: U,
}

impl Percolation {
    /// Creates an N-by-N grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// if `n` is not positive.
    pub fn new(n: i64) -> Result<Self> {
        Self::with_union_find(n)
    }
}

impl<U: UnionFind> Percolation<U> {
    /// Same as [`Percolation::new`], backed by the union-find structure `U`.
    pub fn with_union_find(n: i64) -> Result<Self> {
        let layout = SiteLayout::from_size(n)?;
        Ok(Self {
            layout,
            open: vec![false; layout.site_count()],
            open_count: 0,
            connectivity: U::with_len(layout.element_count()),
            fullness: U::with_len(layout.element_count()),
        })
    }

    /// Returns grid dimension N.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn layout(&self) -> SiteLayout {
        self.layout
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns the structure that links both virtual sites.
    pub fn union_find(&self) -> &U {
        &self.connectivity
    }

    /// Opens site (`row`, `col`), 1-based, if it is not open already.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= grid size.
    /// * `col` - must be >= 1 and <= grid size.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange`](crate::Error::OutOfRange) without changing
    /// anything if either coordinate lies outside `[1, N]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.layout.checked(row, col)?;
        let layout = self.layout;
        let id = layout.id(site);
        if self.open[id] {
            return Ok(());
        }

        let percolated = self.percolates();
        self.open[id] = true;
        self.open_count += 1;

        if layout.is_top(site) {
            self.connectivity.union(id, layout.virtual_top());
            self.fullness.union(id, layout.virtual_top());
        }
        if layout.is_bottom(site) {
            self.connectivity.union(id, layout.virtual_bottom());
        }

        for neighbour in layout.neighbours(site) {
            let other = layout.id(neighbour);
            if !self.open[other] {
                continue;
            }
            if !self.connectivity.connected(id, other) {
                self.connectivity.union(id, other);
            }
            if !self.fullness.connected(id, other) {
                self.fullness.union(id, other);
            }
        }

        if !percolated && self.percolates() {
            trace!(
                "{n}x{n} grid percolates after opening ({row}, {col}), {} sites open",
                self.open_count,
                n = layout.size(),
            );
        }
        Ok(())
    }

    /// Returns `true` if site (`row`, `col`), 1-based, is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.layout.checked(row, col)?;
        Ok(self.is_site_open(site))
    }

    /// Returns `true` if site (`row`, `col`), 1-based, is open and connected
    /// to the top row through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.layout.checked(row, col)?;
        Ok(self.is_site_full(site))
    }

    /// Returns `true` if some chain of open sites connects the top row to the
    /// bottom row.
    pub fn percolates(&self) -> bool {
        self.connectivity
            .connected(self.layout.virtual_top(), self.layout.virtual_bottom())
    }

    // `site` must come from the layout of this grid
    pub(crate) fn is_site_open(&self, site: Site) -> bool {
        self.open[self.layout.id(site)]
    }

    pub(crate) fn is_site_full(&self, site: Site) -> bool {
        self.is_site_open(site)
            && self
                .fullness
                .connected(self.layout.id(site), self.layout.virtual_top())
    }
}

impl<U: UnionFind> Display for Percolation<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let site = Site::new(row, col);
                if self.is_site_full(site) {
                    write!(f, "o")?;
                } else if self.is_site_open(site) {
                    write!(f, ".")?;
                } else {
                    write!(f, "#")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
