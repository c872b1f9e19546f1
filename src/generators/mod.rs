pub mod aldous_broder;
pub mod backtracker;
pub mod binary_tree;
pub mod combo;
pub mod prim;

use rand::prelude::*;

use crate::error::InvariantError;
use crate::grid::Grid;
use crate::snapshot::Snapshot;

use aldous_broder::AldousBroder;
use backtracker::Backtracker;
use binary_tree::BinaryTree;
use combo::Combo;
use prim::Prim;

/// The closed set of generation algorithms. `ALL` fixes the total order used
/// by front ends that cycle through modes; nothing relies on declaration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Backtracker,
    Prim,
    Combo,
    BinaryTree,
    AldousBroder,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Backtracker,
        Mode::Prim,
        Mode::Combo,
        Mode::BinaryTree,
        Mode::AldousBroder,
    ];

    fn position(self) -> usize {
        match self {
            Mode::Backtracker => 0,
            Mode::Prim => 1,
            Mode::Combo => 2,
            Mode::BinaryTree => 3,
            Mode::AldousBroder => 4,
        }
    }

    pub fn next(self) -> Mode {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Mode {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Backtracker => "backtracker",
            Mode::Prim => "prim",
            Mode::Combo => "combo",
            Mode::BinaryTree => "binary-tree",
            Mode::AldousBroder => "aldous-broder",
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "backtracker" => Some(Mode::Backtracker),
            "prim" => Some(Mode::Prim),
            "combo" => Some(Mode::Combo),
            "binary-tree" => Some(Mode::BinaryTree),
            "aldous-broder" => Some(Mode::AldousBroder),
            _ => None,
        }
    }
}

/// Everything a strategy touches while it runs: the grid it carves, the one
/// sequential RNG stream, the iteration counter, and the frame log.
///
/// `tick` is the single unit-of-work bookkeeping point. Each call bumps the
/// iteration counter and, when recording is on, captures one frame, so the
/// recorded sequence always has exactly one frame per counted iteration.
pub(crate) struct RunContext<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut StdRng,

    iters: &'a mut usize,
    frames: &'a mut Vec<Snapshot>,
    record: bool,
}

impl<'a> RunContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        rng: &'a mut StdRng,
        iters: &'a mut usize,
        frames: &'a mut Vec<Snapshot>,
        record: bool,
    ) -> Self {
        Self {
            grid,
            rng,
            iters,
            frames,
            record,
        }
    }

    pub fn random_start(&mut self) -> (usize, usize) {
        let row = self.rng.gen_range(0, self.grid.rows());
        let column = self.rng.gen_range(0, self.grid.columns());
        (row, column)
    }

    pub fn tick(&mut self, active: (usize, usize)) {
        self.tick_with_frontier(active, &[]);
    }

    pub fn tick_with_frontier(&mut self, active: (usize, usize), frontier: &[(usize, usize)]) {
        *self.iters += 1;
        if self.record {
            self.frames
                .push(Snapshot::capture(self.grid, Some(active), frontier));
        }
    }
}

/// One maze-growth algorithm mid-run. Implementations own their frontier
/// state (stack, border list, pool, or just a walk position) and discard it
/// when the run ends.
pub(crate) trait Strategy {
    fn step_generation(&mut self, ctx: &mut RunContext<'_>) -> Result<(), InvariantError>;
    fn is_done(&self) -> bool;
}

fn new_strategy(mode: Mode, ctx: &mut RunContext<'_>) -> Box<dyn Strategy> {
    match mode {
        Mode::Backtracker => Box::new(Backtracker::new(ctx)),
        Mode::Prim => Box::new(Prim::new(ctx)),
        Mode::Combo => Box::new(Combo::new(ctx)),
        Mode::BinaryTree => Box::new(BinaryTree::new(ctx)),
        Mode::AldousBroder => Box::new(AldousBroder::new(ctx)),
    }
}

/// Drive the selected strategy to completion. On return every cell is part of
/// one spanning tree; entry/exit carving and the terminal frame are the
/// caller's job.
pub(crate) fn run(mode: Mode, ctx: &mut RunContext<'_>) -> Result<(), InvariantError> {
    let mut generator = new_strategy(mode, ctx);
    while !generator.is_done() {
        generator.step_generation(ctx)?;
    }
    Ok(())
}
