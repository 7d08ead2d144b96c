// LIFE
pub mod automaton;
pub mod camera;
pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod simulator;
pub mod terminal_ui;

pub use automaton::{next_state, CellState};
pub use config::Config;
pub use driver::Driver;
pub use error::{Error, Result};
pub use grid::{Dimensions, Grid, Position};
pub use simulator::{count_neighbors, step};

#[cfg(test)]
mod tests {

    use crate::{
        automaton::CellState,
        grid::{Grid, Position},
        patterns::{BLOCK, GLIDER, GOSPER_GLIDER_GUN},
        simulator,
    };

    fn alive(grid: &Grid) -> Vec<(isize, isize)> {
        grid.alive_positions()
            .into_iter()
            .map(|pos| (pos.row(), pos.col()))
            .collect()
    }

    #[test]
    fn blinker() {
        // Horizontal triple on row 2
        let mut grid = Grid::new(5, 5).unwrap();
        for col in 1..=3usize {
            grid.set((2usize, col), CellState::Alive).unwrap();
        }

        // Flips to the vertical triple on column 2
        let flipped = simulator::step(&grid);
        assert_eq!(alive(&flipped), vec![(1, 2), (2, 2), (3, 2)]);

        // And back after the second generation (the blinker's period)
        let restored = simulator::step(&flipped);
        assert_eq!(restored, grid);
    }

    #[test]
    fn blinker_against_bottom_right_edge() {
        // Vertical triple touching the last row and column
        let mut grid = Grid::new(6, 6).unwrap();
        for row in 3..=5usize {
            grid.set((row, 5usize), CellState::Alive).unwrap();
        }
        let next = simulator::step(&grid);
        // The live cell (4, 5) only keeps its left neighbor in bounds
        assert_eq!(alive(&next), vec![(4, 4), (4, 5)]);
    }

    #[test]
    fn block_is_still_life() {
        let mut grid = Grid::new(6, 6).unwrap();
        BLOCK.apply(&mut grid, Position::new(2, 2));
        assert_eq!(simulator::run(&grid, 25), grid);

        // Also in the bottom-right corner
        let mut corner = Grid::new(6, 6).unwrap();
        BLOCK.apply(&mut corner, Position::new(4, 4));
        assert_eq!(simulator::run(&corner, 25), corner);
    }

    #[test]
    fn glider_translates_diagonally() {
        // Period 4, moving one cell down and right
        let mut grid = Grid::new(10, 10).unwrap();
        GLIDER.apply(&mut grid, Position::new(1, 1));
        let mut expected = Grid::new(10, 10).unwrap();
        GLIDER.apply(&mut expected, Position::new(2, 2));
        assert_eq!(simulator::run(&grid, 4), expected);
    }

    #[test]
    fn glider_dies_into_block_at_corner() {
        // A glider reaching the bottom-right corner of a bounded grid
        // settles into a block instead of wrapping around.
        let mut grid = Grid::new(8, 8).unwrap();
        GLIDER.apply(&mut grid, Position::new(0, 0));
        let settled = simulator::run(&grid, 40);
        assert_eq!(alive(&settled), vec![(6, 6), (6, 7), (7, 6), (7, 7)]);
    }

    #[test]
    fn gosper_gun_emits_a_glider_every_thirty_generations() {
        let mut grid = Grid::new(120, 120).unwrap();
        let origin = GOSPER_GLIDER_GUN.centered_origin(&grid);
        GOSPER_GLIDER_GUN.apply(&mut grid, origin);
        assert_eq!(grid.population(), 36);
        let grid = simulator::run(&grid, 30);
        assert_eq!(grid.population(), 41);
        let grid = simulator::run(&grid, 30);
        assert_eq!(grid.population(), 46);
    }
}
