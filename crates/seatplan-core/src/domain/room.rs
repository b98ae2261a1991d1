//! Room geometry and rule configuration

use std::collections::BTreeSet;
use std::ops::Range;

use super::student::{RowZone, StudentId};
use super::SeatIndex;
use crate::error::{Result, SeatingError};

/// Grid shape, excluded seats, and rule toggles for one room.
///
/// Seats are addressed row-major: seat `i` sits in row `i / cols`, column
/// `i % cols`. Row 0 is the front of the room (closest to the board).
///
/// # Examples
///
/// ```
/// use seatplan_core::RoomConfig;
///
/// let room = RoomConfig::new(5, 6).with_void_seat(17);
/// assert_eq!(room.capacity(), 30);
/// assert_eq!(room.usable_seats(), 29);
/// assert_eq!(room.row_of(17), 2);
/// assert!(room.is_void(17));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seats that must never hold a student (physical gaps, furniture).
    /// Ordered so iteration and serialized output stay deterministic.
    pub void_seats: BTreeSet<SeatIndex>,
    /// Flag same-gender side neighbors as gender-clash violations.
    pub gender_balance: bool,
    /// Flag same-extreme-level side neighbors as level-clumping violations.
    pub academic_diversity: bool,
    /// Seat-to-id projections of earlier charts, newest last. Carried for
    /// callers that track history; the evaluator does not consult it.
    pub recent_layouts: Vec<Vec<Option<StudentId>>>,
}

impl RoomConfig {
    /// Creates a room with every seat usable and both rule toggles off.
    pub fn new(rows: usize, cols: usize) -> Self {
        RoomConfig {
            rows,
            cols,
            void_seats: BTreeSet::new(),
            gender_balance: false,
            academic_diversity: false,
            recent_layouts: Vec::new(),
        }
    }

    /// Marks one seat as void.
    pub fn with_void_seat(mut self, seat: SeatIndex) -> Self {
        self.void_seats.insert(seat);
        self
    }

    /// Marks a batch of seats as void.
    pub fn with_void_seats(mut self, seats: impl IntoIterator<Item = SeatIndex>) -> Self {
        self.void_seats.extend(seats);
        self
    }

    /// Enables or disables the gender-balance rule.
    pub fn with_gender_balance(mut self, enabled: bool) -> Self {
        self.gender_balance = enabled;
        self
    }

    /// Enables or disables the academic-diversity rule.
    pub fn with_academic_diversity(mut self, enabled: bool) -> Self {
        self.academic_diversity = enabled;
        self
    }

    /// Total number of seats, void ones included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of seats a student can actually occupy.
    pub fn usable_seats(&self) -> usize {
        let capacity = self.capacity();
        let voids_in_range = self.void_seats.iter().filter(|&&s| s < capacity).count();
        capacity - voids_in_range
    }

    /// Row of a seat. Meaningless when `cols` is zero; validated configs
    /// always have positive dimensions.
    #[inline]
    pub fn row_of(&self, seat: SeatIndex) -> usize {
        seat / self.cols
    }

    /// Column of a seat.
    #[inline]
    pub fn col_of(&self, seat: SeatIndex) -> usize {
        seat % self.cols
    }

    /// Seat index at a (row, column) position.
    #[inline]
    pub fn seat_at(&self, row: usize, col: usize) -> SeatIndex {
        row * self.cols + col
    }

    /// Whether a seat is excluded from assignment.
    #[inline]
    pub fn is_void(&self, seat: SeatIndex) -> bool {
        self.void_seats.contains(&seat)
    }

    /// The row a zone lock pins students to.
    #[inline]
    pub fn zone_row(&self, zone: RowZone) -> usize {
        match zone {
            RowZone::Front => 0,
            RowZone::Back => self.rows.saturating_sub(1),
        }
    }

    /// Whether a seat satisfies a zone lock.
    #[inline]
    pub fn in_zone(&self, seat: SeatIndex, zone: RowZone) -> bool {
        self.row_of(seat) == self.zone_row(zone)
    }

    /// Seat indices of one row, in column order.
    pub fn row_seats(&self, row: usize) -> Range<SeatIndex> {
        row * self.cols..(row + 1) * self.cols
    }

    /// Checks the room shape itself: positive dimensions, void seats in
    /// bounds, at least one usable seat. Roster-dependent checks live in
    /// the generator.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SeatingError::EmptyRoom {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let capacity = self.capacity();
        if let Some(&seat) = self.void_seats.iter().find(|&&s| s >= capacity) {
            return Err(SeatingError::VoidSeatOutOfBounds { seat, capacity });
        }
        if self.void_seats.len() == capacity {
            return Err(SeatingError::AllSeatsVoid { capacity });
        }
        Ok(())
    }
}
