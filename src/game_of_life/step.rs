//! Generation stepping: composes grid, neighborhood, and rules

use super::{Grid, Neighborhood, RuleSet};
use rayon::prelude::*;

/// Compute the next value of the cell at a row-major index.
///
/// The index decomposes by the grid's `columns`, which matters on
/// rectangular grids where dividing by `rows` would misassign rows and
/// corrupt neighbor lookups.
pub fn next_cell_state(
    index: usize,
    grid: &Grid,
    neighborhood: Neighborhood,
    rules: &RuleSet,
) -> bool {
    let row = index / grid.columns;
    let column = index % grid.columns;

    let live_neighbors = neighborhood
        .neighbors_of(row, column)
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8;

    rules.next_value(grid.get(row, column), live_neighbors)
}

/// Build the next generation as a brand-new grid of identical dimensions.
///
/// The input grid is read-only throughout; no cell ever observes a mixture
/// of old and new generations.
pub fn next_generation(grid: &Grid, neighborhood: Neighborhood, rules: &RuleSet) -> Grid {
    let cells: Vec<bool> = (0..grid.cells.len())
        .into_par_iter()
        .map(|index| next_cell_state(index, grid, neighborhood, rules))
        .collect();

    Grid {
        rows: grid.rows,
        columns: grid.columns,
        cells,
    }
}

/// Step the grid forward a fixed number of generations
pub fn evolve_generations(
    mut grid: Grid,
    neighborhood: Neighborhood,
    rules: &RuleSet,
    generations: usize,
) -> Grid {
    for _ in 0..generations {
        grid = next_generation(&grid, neighborhood, rules);
    }
    grid
}
