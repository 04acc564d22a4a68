use crate::error::{ConfigError, Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// A grid cell in 0-based coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Maps the cells of an N-by-N grid onto union-find element ids.
///
/// Cell `(r, c)` gets id `r * N + c`. The two ids right after the last cell
/// are reserved for the virtual top and virtual bottom sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteLayout {
    size: usize,
}

impl SiteLayout {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Validates a requested grid dimension.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// if `n` is not positive or N² + 2 elements do not fit in `usize`.
    pub fn from_size(n: i64) -> Result<Self> {
        let size = match usize::try_from(n) {
            Ok(size) if size > 0 => size,
            _ => return Err(ConfigError::GridSize(n).into()),
        };
        if size.checked_mul(size).and_then(|s| s.checked_add(2)).is_none() {
            return Err(ConfigError::GridSize(n).into());
        }
        Ok(Self::new(size))
    }

    /// Returns grid dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of real sites, N².
    pub fn site_count(&self) -> usize {
        self.size * self.size
    }

    /// Returns the number of union-find elements, real sites plus both
    /// virtual ones.
    pub fn element_count(&self) -> usize {
        self.site_count() + 2
    }

    pub fn virtual_top(&self) -> usize {
        self.site_count()
    }

    pub fn virtual_bottom(&self) -> usize {
        self.site_count() + 1
    }

    /// Returns the element id of a given site.
    /// The caller must ensure that `site` lies inside the grid.
    ///
    /// # Arguments
    ///
    /// * `site` - row and column must be >= 0 and < grid size.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is out of bounds, this method may panic on overflow
    /// (or return an id of some other site).
    pub fn id(&self, site: Site) -> usize {
        site.row * self.size + site.col
    }

    /// Inverse of [`SiteLayout::id`]. Returns `None` for virtual and
    /// out-of-range ids.
    pub fn site(&self, id: usize) -> Option<Site> {
        if id >= self.site_count() {
            return None;
        }
        Some(Site::new(id / self.size, id % self.size))
    }

    /// Converts 1-based `row` and `col` into a site, or fails if either of
    /// them lies outside `[1, N]`.
    pub fn checked(&self, row: usize, col: usize) -> Result<Site> {
        if row == 0 || col == 0 || row > self.size || col > self.size {
            return Err(Error::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(Site::new(row - 1, col - 1))
    }

    pub fn is_top(&self, site: Site) -> bool {
        site.row == 0
    }

    pub fn is_bottom(&self, site: Site) -> bool {
        site.row + 1 == self.size
    }

    /// Iterates over in-bounds neighbours of `site` in the order: up, right,
    /// down, left.
    pub fn neighbours(&self, site: Site) -> impl Iterator<Item = Site> + '_ {
        [(-1, 0), (0, 1), (1, 0), (0, -1)]
            .iter()
            .filter_map(move |(dr, dc)| {
                let row = site.row as isize + dr;
                let col = site.col as isize + dc;

                if row >= 0 && row < self.size as isize && col >= 0 && col < self.size as isize {
                    return Some(Site::new(row as usize, col as usize));
                }
                None
            })
    }

    /// Iterates over all sites in row-major order.
    pub fn sites(&self) -> impl Iterator<Item = Site> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Site::new(row, col)))
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn ids_are_a_bijection() {
        for size in 1..=7 {
            let layout = SiteLayout::new(size);
            let ids = layout.sites().map(|s| layout.id(s)).collect::<HashSet<_>>();

            assert_eq!(ids.len(), layout.site_count());
            assert!(ids.iter().all(|&id| id < layout.site_count()));
            for site in layout.sites() {
                assert_eq!(layout.site(layout.id(site)), Some(site));
            }
        }
    }

    #[test]
    fn size_must_be_positive_and_fit() {
        assert_eq!(SiteLayout::from_size(3), Ok(SiteLayout::new(3)));
        for n in [0, -5, i64::MIN, i64::MAX] {
            assert_eq!(
                SiteLayout::from_size(n),
                Err(Error::InvalidConfiguration(ConfigError::GridSize(n)))
            );
        }
    }

    #[test]
    fn virtual_ids_follow_real_ones() {
        let layout = SiteLayout::new(4);
        assert_eq!(layout.virtual_top(), 16);
        assert_eq!(layout.virtual_bottom(), 17);
        assert_eq!(layout.element_count(), 18);
        assert_eq!(layout.site(layout.virtual_top()), None);
        assert_eq!(layout.site(layout.virtual_bottom()), None);
    }

    #[test]
    fn checked_is_one_based() {
        let layout = SiteLayout::new(3);
        assert_eq!(layout.checked(1, 1), Ok(Site::new(0, 0)));
        assert_eq!(layout.checked(3, 2), Ok(Site::new(2, 1)));
        for (row, col) in [(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (4, 4)] {
            assert_eq!(
                layout.checked(row, col),
                Err(Error::OutOfRange { row, col, size: 3 })
            );
        }
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let layout = SiteLayout::new(3);

        let corner = layout.neighbours(Site::new(0, 0)).collect::<Vec<_>>();
        assert_eq!(corner, vec![Site::new(0, 1), Site::new(1, 0)]);

        let center = layout.neighbours(Site::new(1, 1)).collect::<Vec<_>>();
        assert_eq!(
            center,
            vec![
                Site::new(0, 1),
                Site::new(1, 2),
                Site::new(2, 1),
                Site::new(1, 0)
            ]
        );

        assert_eq!(SiteLayout::new(1).neighbours(Site::new(0, 0)).count(), 0);
    }

    #[test]
    fn single_site_is_both_top_and_bottom() {
        let layout = SiteLayout::new(1);
        assert!(layout.is_top(Site::new(0, 0)));
        assert!(layout.is_bottom(Site::new(0, 0)));
    }
}
