use rand::prelude::*;

use crate::error::InvariantError;
use crate::generators::{RunContext, Strategy};
use crate::grid::Direction;

/// Recursive backtracker, run iteratively: a depth-first walk that carves
/// into a random unvisited neighbor while one exists and pops its way back
/// out when the path dead-ends. New passages only ever reach unvisited
/// cells, so the result is a spanning tree by construction.
pub(crate) struct Backtracker {
    // the path so far; the cell on top is the one being advanced from
    stack: Vec<(usize, usize)>,
}

impl Backtracker {
    pub fn new(ctx: &mut RunContext<'_>) -> Self {
        let start = ctx.random_start();
        ctx.grid.mark_visited(start);
        Self { stack: vec![start] }
    }
}

impl Strategy for Backtracker {
    fn step_generation(&mut self, ctx: &mut RunContext<'_>) -> Result<(), InvariantError> {
        let current = match self.stack.last() {
            Some(&cell) => cell,
            None => return Ok(()),
        };

        // direction is chosen randomly, not by scan order, so the candidate
        // ordering itself carries no meaning
        let candidates: Vec<Direction> = ctx
            .grid
            .neighbors(current)
            .filter(|&(coords, _)| !ctx.grid.is_visited(coords))
            .map(|(_, direction)| direction)
            .collect();

        if candidates.is_empty() {
            self.stack.pop();
            let active = self.stack.last().copied().unwrap_or(current);
            ctx.tick(active);
        } else {
            let direction = candidates[ctx.rng.gen_range(0, candidates.len())];
            let next = ctx.grid.open_passage(current, direction);
            ctx.grid.mark_visited(next);
            self.stack.push(next);
            ctx.tick(next);
        }

        Ok(())
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}
