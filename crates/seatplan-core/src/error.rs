//! Error types for seatplan

use thiserror::Error;

use crate::domain::{SeatIndex, StudentId};

/// Main error type for seatplan operations.
///
/// Every variant describes a room or roster problem detected before any
/// placement happens. Once validation passes, generation always returns a
/// layout; unsatisfiable constraints surface as evaluator violations, not
/// as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Room has zero capacity
    #[error("room must have at least one row and one column, got {rows}x{cols}")]
    EmptyRoom { rows: usize, cols: usize },

    /// A void seat index lies outside the grid
    #[error("void seat {seat} is out of bounds for a room with {capacity} seats")]
    VoidSeatOutOfBounds { seat: SeatIndex, capacity: usize },

    /// Every seat is marked void, so nothing can ever be placed
    #[error("all {capacity} seats are void; the room has no usable seat")]
    AllSeatsVoid { capacity: usize },

    /// The roster reuses a student id
    #[error("duplicate student id {id} in roster")]
    DuplicateStudentId { id: StudentId },

    /// A fixed seat lies outside the grid
    #[error("fixed seat {seat} for student {student} is out of bounds for a room with {capacity} seats")]
    FixedSeatOutOfBounds {
        student: StudentId,
        seat: SeatIndex,
        capacity: usize,
    },

    /// Two students claim the same fixed seat
    #[error("students {first} and {second} are both fixed to seat {seat}")]
    FixedSeatConflict {
        seat: SeatIndex,
        first: StudentId,
        second: StudentId,
    },

    /// More students than usable (non-void) seats
    #[error("roster holds {students} students but the room has only {usable} usable seats")]
    RosterTooLarge { students: usize, usable: usize },
}

/// Result type alias for seatplan operations
pub type Result<T> = std::result::Result<T, SeatingError>;
