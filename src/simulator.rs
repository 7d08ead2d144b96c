use tracing::trace;

// LIFE
use crate::automaton::next_state;
use crate::error::Result;
use crate::grid::{Grid, Position, MOORE_NEIGHBORHOOD};

/// Number of live cells among the 8 neighbors of `pos`. Neighbors outside
/// `[0, rows) x [0, cols)` count as dead; the grid does not wrap. `pos`
/// itself must be within the grid.
pub fn count_neighbors(grid: &Grid, pos: impl Into<Position>) -> Result<usize> {
    let pos = grid.check(pos.into())?;
    Ok(live_neighbors(grid, pos))
}

/// `count_neighbors` for a position already known to be in the grid.
fn live_neighbors(grid: &Grid, pos: Position) -> usize {
    MOORE_NEIGHBORHOOD
        .iter()
        .filter(|offset| grid.get_or_dead(pos.offset(offset)).is_alive())
        .count()
}

/// Computes the next generation into a fresh grid. `grid` is only read, so
/// every cell sees the same snapshot of its neighbors.
pub fn step(grid: &Grid) -> Grid {
    let dim = *grid.dim();
    let new_data = grid
        .iter()
        .map(|(pos, cell)| next_state(cell, live_neighbors(grid, pos)))
        .collect();
    trace!(rows = dim.rows(), cols = dim.cols(), "computed generation");
    Grid::from_parts(dim, new_data)
}

/// Applies `step` `nb_gens` times.
pub fn run(grid: &Grid, nb_gens: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..nb_gens {
        current = step(&current);
    }
    current
}
