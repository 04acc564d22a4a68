#![forbid(unsafe_code)]

mod error;
mod grid;
mod layout;
pub mod search;
pub mod stats;
pub mod union_find;

pub use error::{ConfigError, Error, Result};
pub use grid::Percolation;
pub use layout::{Site, SiteLayout};
pub use stats::{run_trial, PercolationStats};
pub use union_find::{QuickFind, UnionFind, WeightedQuickUnion};
