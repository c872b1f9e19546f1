//! Perfect-maze generation over a rectangular cell grid.
//!
//! Five interchangeable strategies grow a spanning tree (every cell
//! reachable, no cycles) over a shared mutable [`Grid`]: recursive
//! backtracking, randomized Prim's, a growing-tree hybrid of the two,
//! randomized binary tree, and the Aldous-Broder random walk. A run can
//! record an append-only [`Snapshot`] sequence of intermediate states for
//! animation; rendering itself is left entirely to callers, who only ever
//! see read-only grid state.

pub mod error;
pub mod generators;
pub mod grid;
pub mod snapshot;

mod generator;

pub use error::{ConfigError, InvariantError};
pub use generator::{Config, Generator};
pub use generators::Mode;
pub use grid::{Cell, Direction, Grid};
pub use snapshot::Snapshot;
