//! Seat adjacency on the room grid

use seatplan_core::{RoomConfig, SeatIndex};
use smallvec::SmallVec;

/// Seats within one king-move (all eight directions) of `seat`.
///
/// This is the separation neighborhood: enemies must not touch in any
/// direction, diagonals and the seat in front or behind included.
pub fn king_neighbors(config: &RoomConfig, seat: SeatIndex) -> SmallVec<[SeatIndex; 8]> {
    let mut neighbors = SmallVec::new();
    if config.cols == 0 {
        return neighbors;
    }
    let row = config.row_of(seat) as isize;
    let col = config.col_of(seat) as isize;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row + dr;
            let c = col + dc;
            if r >= 0 && r < config.rows as isize && c >= 0 && c < config.cols as isize {
                neighbors.push(config.seat_at(r as usize, c as usize));
            }
        }
    }
    neighbors
}

/// The seats directly left and right of `seat`, never wrapping across rows.
///
/// This is the adjacency neighborhood for pairings and the soft rules,
/// which only reason about who sits beside whom.
pub fn side_neighbors(config: &RoomConfig, seat: SeatIndex) -> SmallVec<[SeatIndex; 2]> {
    let mut neighbors = SmallVec::new();
    if config.cols == 0 {
        return neighbors;
    }
    let col = config.col_of(seat);
    if col > 0 {
        neighbors.push(seat - 1);
    }
    if col + 1 < config.cols {
        neighbors.push(seat + 1);
    }
    neighbors
}
