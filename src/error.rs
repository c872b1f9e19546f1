use thiserror::Error;

/// Rejected configuration. Surfaced at construction, before any generation
/// work starts, so the caller can correct the input and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// A structural assumption inside a running algorithm failed. This is a bug
/// in the generator, not bad input: the run aborts and no final grid is
/// handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A border cell was selected for connection but none of its neighbors
    /// are visited. Border cells are only ever inserted because they sit next
    /// to a visited cell, so this cannot happen on a well-formed grid.
    #[error("border cell ({row}, {col}) has no visited neighbor to connect to")]
    IsolatedBorderCell { row: usize, col: usize },

    /// `run` was called a second time on the same generator. Visited flags
    /// are never reset, so a spent generator cannot produce another maze.
    #[error("generator already ran to completion; construct a fresh one")]
    AlreadyRun,
}
