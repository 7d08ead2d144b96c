use super::{Dimensions, Position};
use crate::automaton::CellState;
use crate::error::{Error, Result};

/// One generation of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dim: Dimensions,
    data: Vec<CellState>,
}

impl Grid {
    /// Creates an all-dead grid of `rows x cols` cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let dim = Dimensions::new(rows, cols);
        let size = Self::valid_size(&dim)?;
        let data = vec![CellState::default(); size];
        Ok(Self { dim, data })
    }

    /// Creates a grid from row-major cell data.
    pub fn from_data(dim: Dimensions, data: Vec<CellState>) -> Result<Self> {
        if data.len() != Self::valid_size(&dim)? {
            return Err(Error::InvalidDimensions {
                rows: dim.rows(),
                cols: dim.cols(),
            });
        }
        Ok(Self::from_parts(dim, data))
    }

    /// Cell count of `dim`, rejecting empty extents and ones whose cell count
    /// overflows.
    fn valid_size(dim: &Dimensions) -> Result<usize> {
        match dim.checked_size() {
            Some(size) if size > 0 => Ok(size),
            _ => Err(Error::InvalidDimensions {
                rows: dim.rows(),
                cols: dim.cols(),
            }),
        }
    }

    /// Assembles a grid whose `data` is already known to match `dim`.
    pub(crate) fn from_parts(dim: Dimensions, data: Vec<CellState>) -> Self {
        debug_assert_eq!(data.len(), dim.size());
        Self { dim, data }
    }

    pub fn get(&self, pos: impl Into<Position>) -> Result<CellState> {
        let pos = self.check(pos.into())?;
        Ok(self.data[self.dim.index(pos)])
    }

    pub fn set(&mut self, pos: impl Into<Position>, state: CellState) -> Result<()> {
        let pos = self.check(pos.into())?;
        let idx = self.dim.index(pos);
        self.data[idx] = state;
        Ok(())
    }

    /// Like `get`, but positions outside the grid read as dead.
    #[inline]
    pub fn get_or_dead(&self, pos: Position) -> CellState {
        if self.dim.contains(pos) {
            self.data[self.dim.index(pos)]
        } else {
            CellState::Dead
        }
    }

    #[inline]
    pub fn dim(&self) -> &Dimensions {
        &self.dim
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.dim.rows(), self.dim.cols())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.dim.positions().zip(self.data.iter().copied())
    }

    pub fn population(&self) -> usize {
        self.data.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn alive_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|cell| *cell = CellState::Dead);
    }

    pub(crate) fn check(&self, pos: Position) -> Result<Position> {
        if self.dim.contains(pos) {
            Ok(pos)
        } else {
            Err(Error::OutOfBounds {
                row: pos.row(),
                col: pos.col(),
                rows: self.dim.rows(),
                cols: self.dim.cols(),
            })
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.data.chunks(self.dim.cols()) {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
