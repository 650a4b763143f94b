use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player gets to see of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    /// The opened mine that lost the game
    Detonated,
    // only shown once the game is lost:
    Mine,
    WrongFlag,
}

/// Read-only copy of everything a frontend renders for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mines: CellCount,
    pub cells: Array2<CellView>,
    pub phase: GamePhase,
    pub elapsed_secs: u32,
    pub remaining_mines: i32,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        let size = state.size();
        let mut cells = Array2::default(size.to_nd_index());
        for coords in iter_coords(size) {
            cells[coords.to_nd_index()] = state.view_at(coords);
        }

        Self {
            size,
            mines: state.total_mines(),
            cells,
            phase: state.phase(),
            elapsed_secs: state.elapsed_secs(),
            remaining_mines: state.remaining_mines(),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        in_bounds(coords, self.size).then(|| self.cells[coords.to_nd_index()])
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(size: Coord2, mines: &[Coord2]) -> GameState {
        GameState::new(Board::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn captures_revealed_and_flagged_cells() {
        let mut game = state((2, 2), &[(0, 0)]);

        game.open_cell((1, 1)).unwrap();
        game.toggle_flag((0, 0)).unwrap();
        let snapshot = Snapshot::from_state(&game);

        assert_eq!(snapshot.cell((1, 1)), Some(CellView::Revealed(1)));
        assert_eq!(snapshot.cell((0, 0)), Some(CellView::Flagged));
        assert_eq!(snapshot.cell((0, 1)), Some(CellView::Hidden));
        assert_eq!(snapshot.cell((2, 0)), None);
        assert_eq!(snapshot.remaining_mines, 0);
        assert_eq!(snapshot.phase, GamePhase::InProgress);
    }

    #[test]
    fn snapshot_does_not_follow_later_moves() {
        let mut game = state((2, 2), &[(0, 0)]);
        let snapshot = Snapshot::from(&game);

        game.open_cell((1, 1)).unwrap();

        assert_eq!(snapshot.cell((1, 1)), Some(CellView::Hidden));
        assert_eq!(snapshot.phase, GamePhase::NotStarted);
    }

    #[test]
    fn rows_are_in_row_major_order() {
        let mut game = state((2, 3), &[(1, 2)]);
        game.open_cell((0, 0)).unwrap();
        let snapshot = Snapshot::from_state(&game);

        let rows: Vec<Vec<_>> = snapshot.rows().map(Iterator::collect).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0][0], CellView::Revealed(0));
        assert_eq!(rows[0][1], CellView::Revealed(1));
        assert_eq!(rows[1][2], CellView::Hidden);
    }

    #[test]
    fn serializes_for_frontends() {
        let game = state((1, 2), &[(0, 1)]);
        let json = serde_json::to_value(Snapshot::from_state(&game)).unwrap();

        assert_eq!(json["phase"], "NotStarted");
        assert_eq!(json["remaining_mines"], 1);
        assert_eq!(json["size"], serde_json::json!([1, 2]));
    }
}
