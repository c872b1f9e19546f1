use rand::prelude::*;

use crate::error::InvariantError;
use crate::generators::{RunContext, Strategy};
use crate::grid::Direction;

/// Growing-tree hybrid of the backtracker and Prim's. The border holds
/// visited cells that may still have unvisited neighbors; each step flips a
/// fair coin to work on either the most recently added cell (backtracker
/// bias, long corridors) or a uniformly random one (Prim bias, short branchy
/// corridors).
///
/// The border is an ordered list, not a set: "most recently added" must stay
/// meaningful, so removals preserve order. Cells enter the list exactly once,
/// when first visited, and leave once exhausted.
pub(crate) struct Combo {
    border: Vec<(usize, usize)>,
}

impl Combo {
    pub fn new(ctx: &mut RunContext<'_>) -> Self {
        let start = ctx.random_start();
        ctx.grid.mark_visited(start);
        Self {
            border: vec![start],
        }
    }
}

impl Strategy for Combo {
    fn step_generation(&mut self, ctx: &mut RunContext<'_>) -> Result<(), InvariantError> {
        if self.border.is_empty() {
            return Ok(());
        }

        let index = if ctx.rng.gen_bool(0.5) {
            self.border.len() - 1
        } else {
            ctx.rng.gen_range(0, self.border.len())
        };
        let cell = self.border[index];

        let candidates: Vec<Direction> = ctx
            .grid
            .neighbors(cell)
            .filter(|&(coords, _)| !ctx.grid.is_visited(coords))
            .map(|(_, direction)| direction)
            .collect();

        if candidates.is_empty() {
            // exhausted; keep the remaining list in insertion order
            self.border.remove(index);
            ctx.tick_with_frontier(cell, &self.border);
        } else {
            let direction = candidates[ctx.rng.gen_range(0, candidates.len())];
            let next = ctx.grid.open_passage(cell, direction);
            ctx.grid.mark_visited(next);
            self.border.push(next);
            ctx.tick_with_frontier(next, &self.border);
        }

        Ok(())
    }

    fn is_done(&self) -> bool {
        self.border.is_empty()
    }
}
