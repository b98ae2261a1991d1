//! Domain model for classroom seating
//!
//! The model splits into four pieces:
//! - `Student`: roster entries with their placement constraints
//! - `RoomConfig`: grid shape, void seats, and rule toggles
//! - `Layout`: one optional occupant per seat
//! - `Violation`/`Evaluation`: what the evaluator reports

mod layout;
mod room;
mod student;
mod violation;

pub use layout::Layout;
pub use room::RoomConfig;
pub use student::{AcademicLevel, Gender, RowZone, Student, StudentId};
pub use violation::{Evaluation, Violation, ViolationKind};

/// Row-major seat position within a room grid.
pub type SeatIndex = usize;
