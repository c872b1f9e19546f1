use rand::prelude::*;

use crate::error::InvariantError;
use crate::generators::{RunContext, Strategy};

/// Aldous-Broder: an unfiltered uniform random walk. Whenever the walk first
/// reaches an unvisited cell, the passage just traversed is opened; revisits
/// move without carving. Termination is purely the all-visited predicate, so
/// the expected run length is unbounded; callers wanting a cap impose one
/// externally.
///
/// The walk samples uniformly over every spanning tree of the grid, which no
/// other mode here does.
pub(crate) struct AldousBroder {
    current: (usize, usize),
    done: bool,
}

impl AldousBroder {
    pub fn new(ctx: &mut RunContext<'_>) -> Self {
        let start = ctx.random_start();
        ctx.grid.mark_visited(start);
        Self {
            current: start,
            // a 1x1 grid is fully visited before the walk moves at all
            done: ctx.grid.all_visited(),
        }
    }
}

impl Strategy for AldousBroder {
    fn step_generation(&mut self, ctx: &mut RunContext<'_>) -> Result<(), InvariantError> {
        let moves: Vec<_> = ctx.grid.neighbors(self.current).collect();
        let (next, direction) = moves[ctx.rng.gen_range(0, moves.len())];

        if !ctx.grid.is_visited(next) {
            ctx.grid.open_passage(self.current, direction);
            ctx.grid.mark_visited(next);
        }
        self.current = next;

        if ctx.grid.all_visited() {
            self.done = true;
        }
        ctx.tick(next);
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod test_aldous_broder {
    use crate::{Config, Generator, Mode};

    #[test]
    fn walk_visits_everything() {
        let config = Config {
            rows: 4,
            cols: 4,
            seed: Some(17),
            ..Config::default()
        };
        let mut generator = Generator::new(config).unwrap();
        generator.run(Mode::AldousBroder).unwrap();

        for row in 0..4 {
            for col in 0..4 {
                assert!(generator.grid().cell(row, col).visited);
            }
        }
        // at minimum one move per cell beyond the start
        assert!(generator.iteration_count() >= 15);
    }

    #[test]
    fn revisits_never_carve() {
        let config = Config {
            rows: 3,
            cols: 3,
            seed: Some(5),
            record_snapshots: true,
            ..Config::default()
        };
        let mut generator = Generator::new(config).unwrap();
        generator.run(Mode::AldousBroder).unwrap();

        // openings only grow when the walk lands on a fresh cell, so the
        // total per frame increases by exactly 0 or 2 boolean flips
        let mut previous = 0;
        for frame in generator.snapshots() {
            let mut total = 0;
            for row in 0..3 {
                for col in 0..3 {
                    total += frame.cell(row, col).opening_count();
                }
            }
            if frame.is_final() {
                assert_eq!(total, previous + 2); // entry and exit
            } else {
                assert!(total == previous || total == previous + 2);
            }
            previous = total;
        }
    }
}
