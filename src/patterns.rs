use tracing::debug;

// LIFE
use crate::automaton::CellState;
use crate::grid::{Grid, Position};

/// A named set of live cells, relative to the pattern's top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper-glider-gun",
    cells: &[
        // Left square
        (4, 0),
        (4, 1),
        (5, 0),
        (5, 1),
        // Left part of the gun
        (2, 12),
        (2, 13),
        (3, 11),
        (3, 15),
        (4, 10),
        (4, 16),
        (5, 10),
        (5, 14),
        (5, 16),
        (5, 17),
        (6, 10),
        (6, 16),
        (7, 11),
        (7, 15),
        (8, 12),
        (8, 13),
        // Right part of the gun
        (0, 24),
        (1, 22),
        (1, 24),
        (2, 20),
        (2, 21),
        (3, 20),
        (3, 21),
        (4, 20),
        (4, 21),
        (5, 22),
        (5, 24),
        (6, 24),
        // Right square
        (2, 34),
        (2, 35),
        (3, 34),
        (3, 35),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    BLINKER,
    BLOCK,
    GLIDER,
    TOAD,
    BEACON,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];

impl Pattern {
    /// Looks a pattern up by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    /// Number of rows and columns spanned by the pattern.
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|c| c.0).max().unwrap_or(-1) + 1;
        let cols = self.cells.iter().map(|c| c.1).max().unwrap_or(-1) + 1;
        (rows as usize, cols as usize)
    }

    /// Origin that centers the pattern on `grid`.
    pub fn centered_origin(&self, grid: &Grid) -> Position {
        let (rows, cols) = grid.dimensions();
        let (p_rows, p_cols) = self.extent();
        Position::new(
            (rows as isize - p_rows as isize) / 2,
            (cols as isize - p_cols as isize) / 2,
        )
    }

    /// Marks the pattern's cells alive with its top-left corner at `origin`.
    /// Cells landing outside the grid are skipped. Returns the number of cells
    /// actually written.
    pub fn apply(&self, grid: &mut Grid, origin: Position) -> usize {
        let mut written = 0;
        for &(d_row, d_col) in self.cells {
            let pos = Position::new(origin.row() + d_row, origin.col() + d_col);
            if grid.set(pos, CellState::Alive).is_ok() {
                written += 1;
            }
        }
        if written < self.cells.len() {
            debug!(
                pattern = self.name,
                skipped = self.cells.len() - written,
                "pattern clipped by grid edge"
            );
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Pattern::by_name("Glider").map(|p| p.name), Some("glider"));
        assert!(Pattern::by_name("unknown").is_none());
    }

    #[test]
    fn extents() {
        assert_eq!(BLINKER.extent(), (1, 3));
        assert_eq!(BLOCK.extent(), (2, 2));
        assert_eq!(GOSPER_GLIDER_GUN.extent(), (9, 36));
    }

    #[test]
    fn apply_clips_at_edges() {
        let mut grid = Grid::new(2, 2).unwrap();
        let written = GLIDER.apply(&mut grid, Position::new(0, 0));
        // Only (0, 1) lands within a 2x2 grid.
        assert_eq!(written, 1);
        assert_eq!(grid.population(), 1);

        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(BLOCK.apply(&mut grid, Position::new(-1, -1)), 1);
    }

    #[test]
    fn centered_blinker() {
        let mut grid = Grid::new(5, 5).unwrap();
        let origin = BLINKER.centered_origin(&grid);
        assert_eq!(origin, Position::new(2, 1));
        BLINKER.apply(&mut grid, origin);
        assert_eq!(
            grid.alive_positions(),
            vec![
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3)
            ]
        );
    }

    #[test]
    fn every_pattern_fits_reference_grid() {
        for pattern in PATTERNS {
            let mut grid = Grid::new(120, 120).unwrap();
            let origin = pattern.centered_origin(&grid);
            assert_eq!(pattern.apply(&mut grid, origin), pattern.cells.len());
        }
    }
}
