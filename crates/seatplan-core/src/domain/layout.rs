//! Seating charts: one optional occupant per seat

use super::student::{Student, StudentId};
use super::SeatIndex;

/// A seating chart, stored row-major like the room it was built for.
///
/// Every seat holds at most one student; void and unassigned seats are
/// `None`. Layouts returned by the generator keep each student in exactly
/// one seat. Layouts assembled by hand (a drag-and-drop editor, a test)
/// carry whatever the caller placed and can be evaluated as-is.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    seats: Vec<Option<Student>>,
}

impl Layout {
    /// Creates a chart of `capacity` empty seats.
    pub fn empty(capacity: usize) -> Self {
        Layout {
            seats: vec![None; capacity],
        }
    }

    /// Number of seats, occupied or not.
    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Number of occupied seats.
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    /// Occupant of a seat. Out-of-range seats read as empty.
    #[inline]
    pub fn student_at(&self, seat: SeatIndex) -> Option<&Student> {
        self.seats.get(seat).and_then(|s| s.as_ref())
    }

    /// Puts a student on a seat, replacing any previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is out of range.
    pub fn place(&mut self, seat: SeatIndex, student: Student) {
        self.seats[seat] = Some(student);
    }

    /// Clears a seat, returning its occupant. Out-of-range seats yield
    /// `None`.
    pub fn remove(&mut self, seat: SeatIndex) -> Option<Student> {
        self.seats.get_mut(seat).and_then(|s| s.take())
    }

    /// Exchanges the occupants of two seats; either side may be empty.
    ///
    /// # Panics
    ///
    /// Panics if either seat is out of range.
    pub fn swap_seats(&mut self, a: SeatIndex, b: SeatIndex) {
        self.seats.swap(a, b);
    }

    /// Seat currently holding the given student, if any.
    pub fn seat_of(&self, id: StudentId) -> Option<SeatIndex> {
        self.seats
            .iter()
            .position(|s| s.as_ref().is_some_and(|student| student.id == id))
    }

    /// Occupied seats in scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (SeatIndex, &Student)> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(seat, s)| s.as_ref().map(|student| (seat, student)))
    }

    /// Seat-to-id projection, the shape callers persist and display.
    pub fn to_id_grid(&self) -> Vec<Option<StudentId>> {
        self.seats
            .iter()
            .map(|s| s.as_ref().map(|student| student.id))
            .collect()
    }
}
