// LIFE
pub mod grid;
pub use grid::Grid;

/// A (row, column) location. Coordinates are signed so that positions just
/// outside the grid (e.g. a neighbor of an edge cell) can be expressed and
/// rejected by bounds checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    row: isize,
    col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn row(&self) -> isize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> isize {
        self.col
    }

    #[inline]
    pub fn offset(&self, offset: &Offset) -> Position {
        Position::new(
            self.row.saturating_add(offset.d_row()),
            self.col.saturating_add(offset.d_col()),
        )
    }
}

impl From<(isize, isize)> for Position {
    fn from(pos: (isize, isize)) -> Self {
        Position::new(pos.0, pos.1)
    }
}

impl From<(usize, usize)> for Position {
    fn from(pos: (usize, usize)) -> Self {
        // Values past isize::MAX are off any grid; keep them reported as such.
        Position::new(
            isize::try_from(pos.0).unwrap_or(isize::MAX),
            isize::try_from(pos.1).unwrap_or(isize::MAX),
        )
    }
}

/// Extent of a grid, `rows x cols`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of cells, `None` when it does not fit in a `usize`.
    #[inline]
    pub fn checked_size(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Whether `pos` lies within `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        0 <= pos.row()
            && (pos.row() as usize) < self.rows
            && 0 <= pos.col()
            && (pos.col() as usize) < self.cols
    }

    /// Row-major index of `pos`. The caller must have checked `contains`.
    #[inline]
    pub fn index(&self, pos: Position) -> usize {
        (pos.row() as usize) * self.cols + (pos.col() as usize)
    }

    /// Iterates over every position of the extent in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows)
            .flat_map(move |row| (0..cols).map(move |col| Position::from((row, col))))
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from(dim: (usize, usize)) -> Self {
        Dimensions::new(dim.0, dim.1)
    }
}

/// Relative displacement from a cell to one of its neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Offset(pub isize, pub isize);

impl Offset {
    #[inline]
    pub fn d_row(&self) -> isize {
        self.0
    }

    #[inline]
    pub fn d_col(&self) -> isize {
        self.1
    }
}

pub const MOORE_NEIGHBORHOOD: [Offset; 8] = [
    Offset(-1, -1),
    Offset(-1, 0),
    Offset(-1, 1),
    Offset(0, -1),
    Offset(0, 1),
    Offset(1, -1),
    Offset(1, 0),
    Offset(1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_symmetric_on_both_axes() {
        let dim = Dimensions::new(4, 6);
        assert!(dim.contains(Position::new(0, 0)));
        assert!(dim.contains(Position::new(3, 5)));
        assert!(!dim.contains(Position::new(4, 5)));
        assert!(!dim.contains(Position::new(3, 6)));
        assert!(!dim.contains(Position::new(-1, 0)));
        assert!(!dim.contains(Position::new(0, -1)));
    }

    #[test]
    fn positions_are_row_major() {
        let dim = Dimensions::new(2, 3);
        let indices: Vec<usize> = dim.positions().map(|pos| dim.index(pos)).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn huge_unsigned_coordinates_stay_out_of_range() {
        let pos = Position::from((usize::MAX, 3usize));
        assert_eq!(pos, Position::new(isize::MAX, 3));
        assert!(!Dimensions::new(4, 4).contains(pos));
    }

    #[test]
    fn offset_saturates_at_extremes() {
        let pos = Position::new(isize::MAX, isize::MIN);
        assert_eq!(pos.offset(&Offset(1, -1)), Position::new(isize::MAX, isize::MIN));
    }

    #[test]
    fn checked_size_detects_overflow() {
        assert_eq!(Dimensions::new(3, 4).checked_size(), Some(12));
        assert_eq!(Dimensions::new(usize::MAX / 2 + 1, 2).checked_size(), None);
    }

    #[test]
    fn moore_neighborhood_excludes_center() {
        assert_eq!(MOORE_NEIGHBORHOOD.len(), 8);
        assert!(!MOORE_NEIGHBORHOOD.contains(&Offset(0, 0)));
    }
}
