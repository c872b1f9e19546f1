use std::collections::HashSet;

use rand::prelude::*;

use crate::error::InvariantError;
use crate::generators::{RunContext, Strategy};
use crate::grid::Direction;

/// Randomized Prim's: grow the tree by repeatedly picking a uniformly random
/// border cell (unvisited, adjacent to the visited region) and connecting it
/// to a random visited neighbor.
///
/// `border` is the selection list; `in_border` suppresses duplicate inserts
/// with an O(1) membership check. The set is only ever probed, never
/// iterated, so it cannot perturb the RNG-driven selection order.
pub(crate) struct Prim {
    border: Vec<(usize, usize)>,
    in_border: HashSet<(usize, usize)>,
}

impl Prim {
    pub fn new(ctx: &mut RunContext<'_>) -> Self {
        let start = ctx.random_start();
        ctx.grid.mark_visited(start);

        let mut border = Vec::new();
        let mut in_border = HashSet::new();
        for (coords, _) in ctx.grid.neighbors(start) {
            if in_border.insert(coords) {
                border.push(coords);
            }
        }

        let seeded = Self { border, in_border };
        // visiting the start cell and seeding the border is the first unit
        // of work
        ctx.tick_with_frontier(start, &seeded.border);
        seeded
    }
}

impl Strategy for Prim {
    fn step_generation(&mut self, ctx: &mut RunContext<'_>) -> Result<(), InvariantError> {
        if self.border.is_empty() {
            return Ok(());
        }

        let index = ctx.rng.gen_range(0, self.border.len());
        let cell = self.border.swap_remove(index);
        self.in_border.remove(&cell);

        // re-derive the neighbor split from scratch each step: visited
        // neighbors are connection candidates, the rest grow the border
        let mut connect: Vec<Direction> = Vec::new();
        let mut grow: Vec<(usize, usize)> = Vec::new();
        for (coords, direction) in ctx.grid.neighbors(cell) {
            if ctx.grid.is_visited(coords) {
                connect.push(direction);
            } else if !self.in_border.contains(&coords) {
                grow.push(coords);
            }
        }

        // a border cell is only ever inserted because it touched the visited
        // region, so an empty candidate list means the structure is corrupt
        if connect.is_empty() {
            return Err(InvariantError::IsolatedBorderCell {
                row: cell.0,
                col: cell.1,
            });
        }

        let direction = connect[ctx.rng.gen_range(0, connect.len())];
        ctx.grid.open_passage(cell, direction);
        ctx.grid.mark_visited(cell);

        for coords in grow {
            self.in_border.insert(coords);
            self.border.push(coords);
        }

        ctx.tick_with_frontier(cell, &self.border);
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.border.is_empty()
    }
}
