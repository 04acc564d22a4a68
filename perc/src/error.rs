use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("site ({row}, {col}) is out of bounds for a {size}x{size} grid")]
    OutOfRange { row: usize, col: usize, size: usize },
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive, got {0}")]
    GridSize(i64),
    #[error("trial count must be positive, got {0}")]
    TrialCount(i64),
}

////////////////////////////////////////////////////////////////////////////////

pub type Result<T> = std::result::Result<T, Error>;
