use crate::grid::{Cell, Grid};

/// An immutable copy of the grid's wall and visited state at one instant of a
/// generation run, for renderers to consume.
///
/// Snapshots are tagged with the active cell at the moment of capture, or no
/// cell at all for the terminal finalization frame, plus the border/frontier
/// membership for algorithms that have one. The sequence a generator records
/// is append-only; nothing reorders or mutates frames after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,

    active: Option<(usize, usize)>,
    frontier: Vec<(usize, usize)>,
}

impl Snapshot {
    pub(crate) fn capture(
        grid: &Grid,
        active: Option<(usize, usize)>,
        frontier: &[(usize, usize)],
    ) -> Self {
        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            cells: grid.cells().to_vec(),
            active,
            frontier: frontier.to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.cells[(self.columns * row) + column]
    }

    /// The cell the algorithm was working on when this frame was captured, or
    /// `None` for the finalization frame.
    pub fn active(&self) -> Option<(usize, usize)> {
        self.active
    }

    pub fn is_final(&self) -> bool {
        self.active.is_none()
    }

    pub fn frontier(&self) -> &[(usize, usize)] {
        &self.frontier
    }

    pub fn is_frontier(&self, cell: (usize, usize)) -> bool {
        self.frontier.contains(&cell)
    }
}
