use log::debug;
use rand::prelude::*;

use crate::error::{ConfigError, InvariantError};
use crate::generators::{self, Mode, RunContext};
use crate::grid::{Direction, Grid};
use crate::snapshot::Snapshot;

/// Everything a run needs, fixed at construction. No process-wide state is
/// consulted anywhere else.
#[derive(Debug, Clone)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    /// Record a snapshot for every step of work. The terminal finalization
    /// frame is recorded regardless.
    pub record_snapshots: bool,
    /// Fixed seed for reproducible mazes; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            record_snapshots: false,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }
}

/// Owns one grid, one RNG stream, and one frame log for a single generation
/// run. The grid and run state are exclusively held for the whole of `run`;
/// callers only ever see the finished grid and immutable snapshots.
#[derive(Debug)]
pub struct Generator {
    grid: Grid,
    rng: StdRng,
    frames: Vec<Snapshot>,
    iters: usize,
    record: bool,
    done: bool,
}

impl Generator {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        if config.rows < 1 || config.cols < 1 {
            return Err(ConfigError::InvalidDimensions {
                rows: config.rows,
                cols: config.cols,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            grid: Grid::with_dims(config.rows, config.cols),
            rng,
            frames: Vec::new(),
            iters: 0,
            record: config.record_snapshots,
            done: false,
        })
    }

    /// Generate the maze with the selected mode, carve the entry and exit,
    /// and record the terminal frame. Callable once per generator: visited
    /// flags are never reset, so a second call fails instead of producing a
    /// corrupt grid.
    pub fn run(&mut self, mode: Mode) -> Result<&Grid, InvariantError> {
        if self.done {
            return Err(InvariantError::AlreadyRun);
        }
        self.done = true;

        debug!(
            "generating {}x{} maze with {}",
            self.grid.rows(),
            self.grid.columns(),
            mode.name()
        );

        let mut ctx = RunContext::new(
            &mut self.grid,
            &mut self.rng,
            &mut self.iters,
            &mut self.frames,
            self.record,
        );
        generators::run(mode, &mut ctx)?;

        self.set_entry_exit();
        debug!("maze generated in {} iterations", self.iters);
        Ok(&self.grid)
    }

    fn set_entry_exit(&mut self) {
        self.grid.open_border((0, 0), Direction::Left);
        let exit = (self.grid.rows() - 1, self.grid.columns() - 1);
        self.grid.open_border(exit, Direction::Right);

        // the terminal frame is recorded even when per-step frames are not
        self.frames.push(Snapshot::capture(&self.grid, None, &[]));
    }

    /// The recorded frame sequence, in emission order. Holds only the
    /// finalization frame when recording was off.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.frames
    }

    /// Units of algorithmic work performed. Diagnostics only; nothing keys
    /// control flow off this.
    pub fn iteration_count(&self) -> usize {
        self.iters
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod test_generator {
    use std::collections::VecDeque;

    use super::*;
    use crate::grid::Cell;

    fn seeded(rows: usize, cols: usize, seed: u64, record: bool) -> Generator {
        Generator::new(Config {
            rows,
            cols,
            seed: Some(seed),
            record_snapshots: record,
        })
        .unwrap()
    }

    fn passage_pairs(grid: &Grid) -> usize {
        let mut pairs = 0;
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                let cell = grid.cell(row, col);
                if cell.right && col + 1 < grid.columns() {
                    pairs += 1;
                }
                if cell.down && row + 1 < grid.rows() {
                    pairs += 1;
                }
            }
        }
        pairs
    }

    fn reachable_from_origin(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.cell_count()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back((0, 0));

        while let Some(cell) = queue.pop_front() {
            for (coords, direction) in grid.neighbors(cell) {
                let index = coords.0 * grid.columns() + coords.1;
                if grid.cell(cell.0, cell.1).open(direction) && !seen[index] {
                    seen[index] = true;
                    queue.push_back(coords);
                }
            }
        }

        seen.iter().filter(|&&reached| reached).count()
    }

    fn assert_symmetric(rows: usize, cols: usize, cell_at: &dyn Fn(usize, usize) -> Cell) {
        for row in 0..rows {
            for col in 0..cols {
                let cell = cell_at(row, col);
                if col + 1 < cols {
                    assert_eq!(cell.right, cell_at(row, col + 1).left);
                }
                if row + 1 < rows {
                    assert_eq!(cell.down, cell_at(row + 1, col).up);
                }
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = Generator::new(Config::with_dims(0, 5)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDimensions { rows: 0, cols: 5 });
        assert!(Generator::new(Config::with_dims(5, 0)).is_err());
        assert!(Generator::new(Config::with_dims(1, 1)).is_ok());
    }

    #[test]
    fn second_run_is_refused() {
        let mut generator = seeded(3, 3, 1, false);
        generator.run(Mode::Backtracker).unwrap();
        let err = generator.run(Mode::Backtracker).unwrap_err();
        assert_eq!(err, InvariantError::AlreadyRun);
    }

    #[test]
    fn every_mode_yields_a_spanning_tree() {
        for &mode in Mode::ALL.iter() {
            for &(rows, cols) in [(1, 1), (1, 7), (7, 1), (2, 2), (5, 8)].iter() {
                let mut generator = seeded(rows, cols, 42, false);
                let grid = generator.run(mode).unwrap();

                assert_eq!(
                    passage_pairs(grid),
                    rows * cols - 1,
                    "{} on {}x{}: wrong passage count",
                    mode.name(),
                    rows,
                    cols
                );
                assert_eq!(
                    reachable_from_origin(grid),
                    rows * cols,
                    "{} on {}x{}: not connected",
                    mode.name(),
                    rows,
                    cols
                );
            }
        }
    }

    #[test]
    fn entry_and_exit_are_always_carved() {
        for &mode in Mode::ALL.iter() {
            let mut generator = seeded(4, 6, 7, false);
            let grid = generator.run(mode).unwrap();
            assert!(grid.cell(0, 0).left, "{}: entry missing", mode.name());
            assert!(grid.cell(3, 5).right, "{}: exit missing", mode.name());
        }
    }

    #[test]
    fn walls_stay_symmetric_in_every_frame() {
        for &mode in Mode::ALL.iter() {
            let mut generator = seeded(4, 4, 13, true);
            generator.run(mode).unwrap();

            for frame in generator.snapshots() {
                assert_symmetric(4, 4, &|row, col| *frame.cell(row, col));
            }
            assert_symmetric(4, 4, &|row, col| *generator.grid().cell(row, col));
        }
    }

    #[test]
    fn same_seed_reproduces_grid_and_frames() {
        for &mode in Mode::ALL.iter() {
            let mut first = seeded(6, 5, 2026, true);
            let mut second = seeded(6, 5, 2026, true);
            first.run(mode).unwrap();
            second.run(mode).unwrap();

            assert_eq!(first.grid().cells(), second.grid().cells());
            assert_eq!(first.snapshots(), second.snapshots());
            assert_eq!(first.iteration_count(), second.iteration_count());
        }
    }

    #[test]
    fn recording_on_emits_one_frame_per_iteration() {
        for &mode in Mode::ALL.iter() {
            let mut generator = seeded(5, 4, 31, true);
            generator.run(mode).unwrap();

            let frames = generator.snapshots();
            assert_eq!(frames.len(), generator.iteration_count() + 1);
            for frame in &frames[..frames.len() - 1] {
                assert!(frame.active().is_some());
            }
            assert!(frames.last().unwrap().is_final());
        }
    }

    #[test]
    fn recording_off_keeps_only_the_terminal_frame() {
        for &mode in Mode::ALL.iter() {
            let mut generator = seeded(5, 4, 31, false);
            generator.run(mode).unwrap();

            let frames = generator.snapshots();
            assert_eq!(frames.len(), 1);
            assert!(frames[0].is_final());
        }
    }

    #[test]
    fn one_by_one_grid_per_mode() {
        let expected_iters = [
            (Mode::Backtracker, 1),
            (Mode::Prim, 1),
            (Mode::Combo, 1),
            (Mode::BinaryTree, 0),
            (Mode::AldousBroder, 0),
        ];

        for &(mode, iters) in expected_iters.iter() {
            let mut generator = seeded(1, 1, 0, false);
            let grid = generator.run(mode).unwrap();

            let cell = grid.cell(0, 0);
            assert!(cell.left && cell.right, "{}: entry/exit", mode.name());
            assert!(!cell.up && !cell.down, "{}: stray opening", mode.name());
            assert!(cell.visited);

            assert_eq!(generator.iteration_count(), iters, "{}", mode.name());
            assert_eq!(generator.snapshots().len(), 1);
        }
    }
}
