use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    Mine,
    /// Safe cell with the number of mines among its neighbors.
    Clear(u8),
}

impl BoardCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Clear(count) => Some(count),
        }
    }
}

/// Static mine layout of one game, with the neighbor counts precomputed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<BoardCell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board from a mask, where `true` marks a mine.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let fits = |len: usize| (1..=usize::from(Coord::MAX)).contains(&len);
        if !fits(rows) || !fits(cols) {
            let (rows, cols) = grid_size(mine_mask);
            let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
            return Err(GameError::InvalidConfiguration {
                rows,
                cols,
                mines: CellCount::try_from(mines).unwrap_or(CellCount::MAX),
            });
        }
        Ok(Self::from_valid_mask(mine_mask))
    }

    /// Caller guarantees both dimensions fit in [`Coord`].
    pub(crate) fn from_valid_mask(mine_mask: &Array2<bool>) -> Self {
        let size = grid_size(mine_mask);
        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                mine_count += 1;
                return BoardCell::Mine;
            }
            let coords = (row as Coord, col as Coord);
            let adjacent = Neighbors::new(coords, size)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            BoardCell::Clear(adjacent as u8)
        });

        Self { cells, mine_count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds { coords, size });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_valid_mask(&mine_mask))
    }

    pub fn config(&self) -> BoardConfig {
        let (rows, cols) = self.size();
        BoardConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if in_bounds(coords, size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords, size })
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        self.cells.neighbors(coords)
    }

    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(|&coords| self.contains_mine(coords))
    }
}

impl Index<Coord2> for Board {
    type Output = BoardCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
