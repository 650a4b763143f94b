use alloc::collections::VecDeque;

use crate::*;

/// Opens `origin` on top of `revealed` and flood fills from it.
///
/// A mine is opened alone. A safe cell with no adjacent mines keeps opening its
/// neighbors, breadth first, until every frontier cell has a nonzero count.
/// Flags are not an input: a flagged cell reached by the fill is opened too.
pub fn reveal(board: &Board, revealed: &RevealedSet, origin: Coord2) -> RevealedSet {
    debug_assert!(
        in_bounds(origin, board.size()),
        "reveal origin {origin:?} outside of {:?}",
        board.size()
    );

    let mut next = revealed.clone();
    if !next.insert(origin) {
        return next;
    }

    if board.contains_mine(origin) {
        log::debug!("Revealed mine at {:?}", origin);
        return next;
    }

    let mut to_visit = VecDeque::from([origin]);
    while let Some(coords) = to_visit.pop_front() {
        if board[coords].adjacent_mines() != Some(0) {
            continue;
        }
        for neighbor in board.neighbors(coords) {
            // the mask doubles as the visited set
            if next.insert(neighbor) {
                log::trace!("Flood revealed {:?} from {:?}", neighbor, coords);
                to_visit.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "Reveal at {:?} opened {} cells",
        origin,
        next.len() - revealed.len()
    );
    next
}
