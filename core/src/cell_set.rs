use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board-shaped set of coordinates, backed by a mask plus a running count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSet {
    mask: Array2<bool>,
    count: CellCount,
}

/// Cells opened so far. Never shrinks during a game.
pub type RevealedSet = CellSet;

/// Cells marked by the player.
pub type FlaggedSet = CellSet;

impl CellSet {
    pub fn new(size: Coord2) -> Self {
        Self {
            mask: Array2::default(size.to_nd_index()),
            count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mask)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.mask[coords.to_nd_index()]
    }

    pub fn len(&self) -> CellCount {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(|&coords| self.contains(coords))
    }

    /// Returns `true` when `coords` was not in the set yet.
    pub(crate) fn insert(&mut self, coords: Coord2) -> bool {
        self.set(coords, true)
    }

    /// Returns `true` when `coords` was in the set.
    pub(crate) fn remove(&mut self, coords: Coord2) -> bool {
        self.set(coords, false)
    }

    /// Flips membership of `coords`, returning whether it is now a member.
    pub(crate) fn toggle(&mut self, coords: Coord2) -> bool {
        if !self.insert(coords) {
            self.remove(coords);
            return false;
        }
        true
    }

    fn set(&mut self, coords: Coord2, member: bool) -> bool {
        let cell = &mut self.mask[coords.to_nd_index()];
        if *cell == member {
            return false;
        }
        *cell = member;
        if member {
            self.count += 1;
        } else {
            self.count -= 1;
        }
        true
    }
}
