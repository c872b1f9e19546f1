use rand::prelude::*;

use crate::error::InvariantError;
use crate::generators::{RunContext, Strategy};
use crate::grid::Direction;

/// Randomized binary tree: pull cells out of a pool in random order and carve
/// each one toward up or right only. The restriction gives every cell at most
/// one parent, so the result is a spanning tree without any visited-checks on
/// the neighbor, biased toward corridors along the top row and right column.
pub(crate) struct BinaryTree {
    pool: Vec<(usize, usize)>,
}

impl BinaryTree {
    pub fn new(ctx: &mut RunContext<'_>) -> Self {
        let mut pool = Vec::with_capacity(ctx.grid.cell_count());
        for row in 0..ctx.grid.rows() {
            for col in 0..ctx.grid.columns() {
                pool.push((row, col));
            }
        }
        Self { pool }
    }
}

impl Strategy for BinaryTree {
    fn step_generation(&mut self, ctx: &mut RunContext<'_>) -> Result<(), InvariantError> {
        if self.pool.is_empty() {
            return Ok(());
        }

        let index = ctx.rng.gen_range(0, self.pool.len());
        let cell = self.pool.swap_remove(index);
        ctx.grid.mark_visited(cell);

        let mut candidates: Vec<Direction> = Vec::with_capacity(2);
        if ctx.grid.neighbor(cell, Direction::Up).is_some() {
            candidates.push(Direction::Up);
        }
        if ctx.grid.neighbor(cell, Direction::Right).is_some() {
            candidates.push(Direction::Right);
        }

        let direction = match candidates.len() {
            // the top-right corner carves nothing and counts no work
            0 => return Ok(()),
            1 => candidates[0],
            _ => candidates[ctx.rng.gen_range(0, candidates.len())],
        };

        ctx.grid.open_passage(cell, direction);
        ctx.tick(cell);
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.pool.is_empty()
    }
}
